//! Failures of a search or import, as shown to the operator.

use common::search_criteria::CriteriaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("provider response is not a JSON object: {0}")]
    MalformedResponse(String),
    #[error("could not read event file: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Connection-level failures and non-success statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport(_) | SearchError::Status { .. })
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(value: serde_json::Error) -> Self {
        SearchError::MalformedResponse(value.to_string())
    }
}
