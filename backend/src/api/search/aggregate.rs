//! Frequency counts over a result set, for Pareto charts.

use std::collections::HashMap;

use common::{
    aggregate_count::{AggregateBucket, AggregateCount},
    flat_record::{FlatRecord, FlatRecordField},
    row_filter::RowFilter,
};

/// Counts rows per value of `category`, after applying `filter` if given.
///
/// Buckets are sorted by count descending. Ties keep the order in which the
/// bucket was first encountered, so the same rows always chart the same way.
pub fn count_by(rows: &[FlatRecord], category: FlatRecordField, filter: Option<&RowFilter>) -> AggregateCount {
    let mut bucket_index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<AggregateBucket> = Vec::new();

    for row in rows.iter().filter(|row| filter.is_none_or(|f| f.matches(row))) {
        let label = row.display_value(category);
        match bucket_index.get(label) {
            Some(&i) => buckets[i].count += 1,
            None => {
                bucket_index.insert(label, buckets.len());
                buckets.push(AggregateBucket { label: label.to_string(), count: 1 });
            }
        }
    }
    // stable: equal counts stay in first-seen order
    buckets.sort_by(|a, b| b.count.cmp(&a.count));

    AggregateCount { category, buckets }
}

/// Rows matching every filter, in their original order.
pub fn filter_rows<'a>(rows: &'a [FlatRecord], filters: &[RowFilter]) -> Vec<&'a FlatRecord> {
    rows.iter()
        .filter(|row| filters.iter().all(|f| f.matches(row)))
        .collect()
}
