//! What the operator asked for, and the provider request it turns into.

use serde::{Deserialize, Serialize};

use crate::search_const::CANNED_QUERY_LIMIT;
use crate::search_criteria::SearchCriteria;

/// A search action. The two shortcuts ignore any general form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchRequest {
    General(SearchCriteria),
    TopMalfunctions,
    TopInjuries,
}

impl SearchRequest {
    pub fn limit(&self) -> u32 {
        match self {
            SearchRequest::General(criteria) => criteria.limit(),
            SearchRequest::TopMalfunctions | SearchRequest::TopInjuries => CANNED_QUERY_LIMIT,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SearchRequest::General(criteria) => {
                let mut text = format!("{} = {:?}", criteria.field(), criteria.term());
                if let Some(range) = criteria.date_range() {
                    text.push_str(&format!(", received {} .. {}", range.start(), range.end()));
                }
                text
            }
            SearchRequest::TopMalfunctions => format!("top {CANNED_QUERY_LIMIT} malfunctions"),
            SearchRequest::TopInjuries => format!("top {CANNED_QUERY_LIMIT} injuries"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
}

/// A fully built provider request. `search` is the parameter exactly as it appears in `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub search: String,
    pub sort: String,
    pub limit: u32,
}
