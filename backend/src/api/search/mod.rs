//! Query building, flattening, aggregation and the search pipeline.

pub mod query_builder;
pub mod flatten;
pub mod aggregate;

mod search_events;
pub use search_events::{import_events_file, search_events};
