//! Runs a search or file import end to end and stores the flattened rows.

use std::path::Path;

use common::search_request::SearchRequest;

use crate::{
    api::search::{flatten::flatten_events, query_builder::build_request},
    error::SearchError,
    provider_utils::{event_file::read_events_file, openfda_utils::EventSource},
    session_store::{ResultSource, SessionStore},
};

/// Builds the request, fetches, flattens every record and only then replaces the
/// store. On any failure the store keeps its previous rows.
pub async fn search_events<S: EventSource + ?Sized>(
    store: &mut SessionStore,
    source: &S,
    base_url: &str,
    request: SearchRequest,
) -> Result<usize, SearchError> {
    let spec = build_request(base_url, &request);
    let raw_events = source.fetch_events(&spec).await.inspect_err(|e| {
        tracing::error!("search_events: {} failed: {}", request.describe(), e);
    })?;

    let rows = flatten_events(&raw_events);
    let count = rows.len();
    store.set(ResultSource::Search(request), rows);
    Ok(count)
}

/// Same as [`search_events`] but reads a saved provider response from disk.
pub async fn import_events_file(store: &mut SessionStore, path: &Path) -> Result<usize, SearchError> {
    let raw_events = read_events_file(path).await.inspect_err(|e| {
        tracing::error!("import_events_file: {} failed: {}", path.display(), e);
    })?;

    let rows = flatten_events(&raw_events);
    let count = rows.len();
    store.set(ResultSource::File(path.to_path_buf()), rows);
    Ok(count)
}
