//! Plain-text views of the stored results.

pub mod chart;
pub mod links;
pub mod table;
