//! Column predicates used by the filterable table and the aggregator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    flat_record::{FlatRecord, FlatRecordField},
    search_criteria::CriteriaError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    /// Exact match; an empty value matches null cells.
    Equals,
    /// Case-insensitive substring.
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    pub column: FlatRecordField,
    pub op: FilterOp,
    pub value: String,
}

impl RowFilter {
    pub fn equals(column: FlatRecordField, value: impl Into<String>) -> Self {
        Self { column, op: FilterOp::Equals, value: value.into() }
    }

    pub fn contains(column: FlatRecordField, value: impl Into<String>) -> Self {
        Self { column, op: FilterOp::Contains, value: value.into() }
    }

    pub fn matches(&self, row: &FlatRecord) -> bool {
        let cell = row.display_value(self.column);
        match self.op {
            FilterOp::Equals => cell == self.value,
            FilterOp::Contains => cell.to_lowercase().contains(&self.value.to_lowercase()),
        }
    }
}

impl FromStr for RowFilter {
    type Err = CriteriaError;

    /// `column=value` or `column~value`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(split_at) = s.find(['=', '~']) else {
            return Err(CriteriaError::InvalidFilter(s.to_string()));
        };
        let (column, rest) = s.split_at(split_at);
        let op = if rest.starts_with('=') { FilterOp::Equals } else { FilterOp::Contains };
        let column = column.parse::<FlatRecordField>()?;
        Ok(Self { column, op, value: rest[1..].to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(manufacturer: Option<&str>, event_type: &str) -> FlatRecord {
        FlatRecord {
            manufacturer: manufacturer.map(str::to_string),
            event_type: Some(event_type.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn parses_both_operators() {
        let exact: RowFilter = "event_type=Malfunction".parse().unwrap();
        assert_eq!(exact, RowFilter::equals(FlatRecordField::EventType, "Malfunction"));
        let fuzzy: RowFilter = "Manufacturer~acme".parse().unwrap();
        assert_eq!(fuzzy, RowFilter::contains(FlatRecordField::Manufacturer, "acme"));
    }

    #[test]
    fn rejects_malformed_filters() {
        assert!(matches!("manufacturer".parse::<RowFilter>(), Err(CriteriaError::InvalidFilter(_))));
        assert!(matches!("colour=red".parse::<RowFilter>(), Err(CriteriaError::InvalidColumn(_))));
    }

    #[test]
    fn contains_ignores_case_and_equals_does_not() {
        let r = row(Some("ACME Medical"), "Injury");
        assert!(RowFilter::contains(FlatRecordField::Manufacturer, "acme").matches(&r));
        assert!(!RowFilter::equals(FlatRecordField::EventType, "injury").matches(&r));
        assert!(RowFilter::equals(FlatRecordField::EventType, "Injury").matches(&r));
    }

    #[test]
    fn empty_equals_matches_null() {
        assert!(RowFilter::equals(FlatRecordField::Manufacturer, "").matches(&row(None, "Death")));
    }
}
