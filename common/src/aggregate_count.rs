//! Frequency counts for Pareto charts.

use serde::{Deserialize, Serialize};

use crate::flat_record::FlatRecordField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCount {
    pub category: FlatRecordField,
    /// Descending by count; equal counts keep first-seen order.
    pub buckets: Vec<AggregateBucket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateBucket {
    /// Category value; null cells are counted under the empty label.
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoPoint {
    pub label: String,
    pub count: u64,
    pub cumulative_percent: f64,
}

impl AggregateCount {
    pub fn empty(category: FlatRecordField) -> Self {
        Self { category, buckets: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.buckets.iter().find(|b| b.label == label).map(|b| b.count)
    }

    pub fn pareto(&self) -> Vec<ParetoPoint> {
        let total = self.total();
        let mut running = 0;
        self.buckets
            .iter()
            .map(|bucket| {
                running += bucket.count;
                ParetoPoint {
                    label: bucket.label.clone(),
                    count: bucket.count,
                    cumulative_percent: if total == 0 { 0.0 } else { running as f64 * 100.0 / total as f64 },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pareto_accumulates_to_one_hundred() {
        let counts = AggregateCount {
            category: FlatRecordField::EventType,
            buckets: vec![
                AggregateBucket { label: "A".to_string(), count: 3 },
                AggregateBucket { label: "B".to_string(), count: 1 },
            ],
        };
        let points = counts.pareto();
        assert_eq!(points.len(), 2);
        assert!((points[0].cumulative_percent - 75.0).abs() < 1e-9);
        assert!((points[1].cumulative_percent - 100.0).abs() < 1e-9);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("B"), Some(1));
        assert_eq!(counts.get("C"), None);
    }

    #[test]
    fn empty_counts_have_no_points() {
        let counts = AggregateCount::empty(FlatRecordField::Manufacturer);
        assert!(counts.is_empty());
        assert!(counts.pareto().is_empty());
    }
}
