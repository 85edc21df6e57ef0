//! Saved provider responses on disk (the "upload a JSON file" path).

use std::path::Path;

use serde_json::Value;

use crate::{error::SearchError, provider_utils::openfda_utils::parse_results};

pub async fn read_events_file(path: &Path) -> Result<Vec<Value>, SearchError> {
    tracing::info!("reading events from {}", path.display());
    let body = tokio::fs::read_to_string(path).await?;
    parse_results(&body)
}
