//! Data model shared between the backend pipeline and the command line front end.

extern crate serde;


pub mod search_const;
pub mod search_criteria;
pub mod search_request;
pub mod flat_record;
pub mod row_filter;
pub mod aggregate_count;
