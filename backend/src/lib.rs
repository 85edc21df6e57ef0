//! MAUDE device event search: request building, fetching, flattening, counting and export.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod provider_utils;
pub mod session_store;
