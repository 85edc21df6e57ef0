use std::{future::Future, pin::Pin};

use common::search_request::RequestSpec;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::SearchError;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

const MAX_ERROR_BODY_CHARS: usize = 500;

/// Anything that can answer a provider request with raw event records.
pub trait EventSource: Send + Sync {
    /// Performs one request and returns the `results` array, empty when nothing matched.
    fn fetch_events<'a>(&'a self, request: &'a RequestSpec) -> BoxFuture<'a, Result<Vec<Value>, SearchError>>;
}

/// `reqwest`-backed [`EventSource`] talking to openFDA.
#[derive(Debug, Clone, Default)]
pub struct OpenFdaClient {
    http: reqwest::Client,
}

impl OpenFdaClient {
    pub fn new() -> Self {
        Self { http: reqwest::Client::new() }
    }
}

impl EventSource for OpenFdaClient {
    fn fetch_events<'a>(&'a self, request: &'a RequestSpec) -> BoxFuture<'a, Result<Vec<Value>, SearchError>> {
        Box::pin(async move {
            tracing::info!("PROVIDER REQUEST: {}", request.url);
            let t0 = std::time::Instant::now();

            let response = self.http.get(&request.url).send().await?;
            let status = response.status();
            let response_txt = response.text().await?;
            let dt_ms = t0.elapsed().as_millis();

            if status == StatusCode::NOT_FOUND && is_no_match_body(&response_txt) {
                tracing::info!("PROVIDER RESPONSE: no matches ({}ms)", dt_ms);
                return Ok(Vec::new());
            }
            if status.is_client_error() || status.is_server_error() {
                tracing::warn!("PROVIDER RESPONSE: {} ({}ms)", status, dt_ms);
                return Err(SearchError::Status {
                    status: status.as_u16(),
                    body: response_txt.chars().take(MAX_ERROR_BODY_CHARS).collect(),
                });
            }

            let events = parse_results(&response_txt)?;
            tracing::info!("PROVIDER RESPONSE: {} records, len = {} ({}ms)", events.len(), response_txt.len(), dt_ms);
            Ok(events)
        })
    }
}

/// Parses a provider response body and takes out its `results` array.
pub fn parse_results(body: &str) -> Result<Vec<Value>, SearchError> {
    let value = serde_json::from_str::<Value>(body)?;
    extract_results(value)
}

/// A missing or non-array `results` key counts as zero matches.
pub fn extract_results(value: Value) -> Result<Vec<Value>, SearchError> {
    let Value::Object(mut obj) = value else {
        return Err(SearchError::MalformedResponse(format!("expected an object, got {}", json_kind(&value))));
    };
    match obj.remove("results") {
        Some(Value::Array(events)) => Ok(events),
        _ => Ok(Vec::new()),
    }
}

// openFDA answers an empty search with 404 and {"error": {"code": "NOT_FOUND", ...}}
fn is_no_match_body(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/code").and_then(Value::as_str).map(|code| code == "NOT_FOUND"))
        .unwrap_or(false)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_are_extracted() {
        let events = parse_results(r#"{"meta": {}, "results": [{"event_type": "Injury"}, {}]}"#).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn missing_or_odd_results_mean_no_matches() {
        assert!(parse_results(r#"{"meta": {}}"#).unwrap().is_empty());
        assert!(parse_results(r#"{"results": null}"#).unwrap().is_empty());
        assert!(parse_results(r#"{"results": {}}"#).unwrap().is_empty());
    }

    #[test]
    fn non_object_bodies_are_malformed() {
        assert!(matches!(parse_results("[1, 2]"), Err(SearchError::MalformedResponse(_))));
        assert!(matches!(parse_results("<html>"), Err(SearchError::MalformedResponse(_))));
    }

    #[test]
    fn recognises_provider_not_found_body() {
        assert!(is_no_match_body(r#"{"error": {"code": "NOT_FOUND", "message": "No matches found!"}}"#));
        assert!(!is_no_match_body(r#"{"error": {"code": "BAD_REQUEST"}}"#));
        assert!(!is_no_match_body("Not Found"));
    }
}
