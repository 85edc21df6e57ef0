//! Holds the most recent result set so several views can read it without re-fetching.
//!
//! One writer (a completed search or import) and any number of readers on the
//! same thread. Rows are only ever replaced as a whole.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use common::{
    flat_record::{FlatRecord, ResultSet},
    search_request::SearchRequest,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ResultSource {
    Search(SearchRequest),
    File(PathBuf),
}

impl ResultSource {
    pub fn describe(&self) -> String {
        match self {
            ResultSource::Search(request) => request.describe(),
            ResultSource::File(path) => format!("file {}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredResult {
    pub source: ResultSource,
    pub stored_at: DateTime<Local>,
    pub rows: ResultSet,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<StoredResult>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored rows wholesale.
    pub fn set(&mut self, source: ResultSource, rows: ResultSet) {
        tracing::debug!("session store replaced: {} rows from {}", rows.len(), source.describe());
        self.current = Some(StoredResult { source, stored_at: Local::now(), rows });
    }

    /// Stored rows, empty if nothing was stored yet.
    pub fn get(&self) -> &[FlatRecord] {
        self.current.as_ref().map(|c| c.rows.as_slice()).unwrap_or(&[])
    }

    pub fn current(&self) -> Option<&StoredResult> {
        self.current.as_ref()
    }
}
