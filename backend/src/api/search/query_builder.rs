//! Builds the provider request URL for a search action.

use common::{
    search_const::{
        DATE_RECEIVED_FIELD, EVENT_TYPE_FIELD, EVENT_TYPE_INJURY, EVENT_TYPE_MALFUNCTION, SORT_CLAUSE,
    },
    search_criteria::{DateRange, SearchCriteria},
    search_request::{HttpMethod, RequestSpec, SearchRequest},
};
use url::form_urlencoded;

const DATE_FORMAT: &str = "%Y%m%d";

pub fn build_request(base_url: &str, request: &SearchRequest) -> RequestSpec {
    let search = build_search_expression(request);
    let limit = request.limit();
    let url = format!("{base_url}?search={search}&sort={SORT_CLAUSE}&limit={limit}");
    tracing::debug!("built provider request: {}", url);
    RequestSpec {
        method: HttpMethod::Get,
        url,
        search,
        sort: SORT_CLAUSE.to_string(),
        limit,
    }
}

/// Value of the `search` parameter, already in wire form.
pub fn build_search_expression(request: &SearchRequest) -> String {
    match request {
        SearchRequest::General(criteria) => general_search_expression(criteria),
        SearchRequest::TopMalfunctions => format!("{EVENT_TYPE_FIELD}:{EVENT_TYPE_MALFUNCTION}"),
        SearchRequest::TopInjuries => format!("{EVENT_TYPE_FIELD}:{EVENT_TYPE_INJURY}"),
    }
}

fn general_search_expression(criteria: &SearchCriteria) -> String {
    let mut terms = vec![format!(
        "{}:{}",
        criteria.field().provider_path(),
        encode_term(criteria.term())
    )];
    if let Some(range) = criteria.date_range() {
        terms.push(date_range_clause(&range));
    }
    terms.join("+AND+")
}

fn date_range_clause(range: &DateRange) -> String {
    format!(
        "{DATE_RECEIVED_FIELD}:[{}+TO+{}]",
        range.start().format(DATE_FORMAT),
        range.end().format(DATE_FORMAT)
    )
}

/// Percent-encodes the free text so it cannot inject provider syntax.
/// Multi-word terms and terms the operator already quoted are sent as one quoted phrase.
fn encode_term(term: &str) -> String {
    let quoted = term
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|inner| !inner.trim().is_empty());
    let phrase = quoted.unwrap_or(term);
    let encoded: String = form_urlencoded::byte_serialize(phrase.as_bytes()).collect();
    if quoted.is_some() || phrase.chars().any(char::is_whitespace) {
        format!("%22{encoded}%22")
    } else {
        encoded
    }
}
