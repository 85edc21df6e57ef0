//! Search criteria entered by the operator, validated at construction.

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search_const::MAX_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("unsupported search field: {0:?} (expected generic-name, product-code or udi-di)")]
    InvalidField(String),
    #[error("search term must not be empty")]
    EmptyTerm,
    #[error("limit must be between 1 and {max}, got {0}", max = MAX_LIMIT)]
    LimitOutOfRange(u32),
    #[error("date range start {start} is after end {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
    #[error("unknown column: {0:?}")]
    InvalidColumn(String),
    #[error("invalid row filter {0:?} (expected column=value or column~value)")]
    InvalidFilter(String),
}

/// Device fields the provider can be searched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    GenericName,
    ProductCode,
    UdiDi,
}

impl SearchField {
    /// Provider-side path of the field inside an event record.
    pub fn provider_path(&self) -> &'static str {
        match self {
            SearchField::GenericName => "device.generic_name",
            SearchField::ProductCode => "device.device_report_product_code",
            SearchField::UdiDi => "device.udi_di",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SearchField::GenericName => "Generic Name",
            SearchField::ProductCode => "Product Code",
            SearchField::UdiDi => "UDI DI",
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SearchField {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "genericname" => Ok(SearchField::GenericName),
            "productcode" => Ok(SearchField::ProductCode),
            "udidi" | "udi" => Ok(SearchField::UdiDi),
            _ => Err(CriteriaError::InvalidField(s.to_string())),
        }
    }
}

/// Inclusive range on the report's received date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CriteriaError> {
        if start > end {
            return Err(CriteriaError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// One search intent. Immutable once built; fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchCriteria")]
pub struct SearchCriteria {
    field: SearchField,
    term: String,
    date_range: Option<DateRange>,
    limit: u32,
}

impl SearchCriteria {
    pub fn new(
        field: SearchField,
        term: impl Into<String>,
        date_range: Option<DateRange>,
        limit: u32,
    ) -> Result<Self, CriteriaError> {
        let term = term.into().trim().to_string();
        if term.is_empty() {
            return Err(CriteriaError::EmptyTerm);
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(CriteriaError::LimitOutOfRange(limit));
        }
        Ok(Self { field, term, date_range, limit })
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

// Wire shapes; deserialized values go through the same checks as `new`.
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CriteriaError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

#[derive(Deserialize)]
struct RawSearchCriteria {
    field: SearchField,
    term: String,
    date_range: Option<DateRange>,
    limit: u32,
}

impl TryFrom<RawSearchCriteria> for SearchCriteria {
    type Error = CriteriaError;

    fn try_from(raw: RawSearchCriteria) -> Result<Self, Self::Error> {
        SearchCriteria::new(raw.field, raw.term, raw.date_range, raw.limit)
    }
}
