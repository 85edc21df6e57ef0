use axum::{Json, Router, extract::RawQuery, http::StatusCode, routing::get};
use backend::{
    api::search::query_builder::build_request,
    error::SearchError,
    provider_utils::openfda_utils::{EventSource, OpenFdaClient},
};
use chrono::NaiveDate;
use common::{
    search_criteria::{DateRange, SearchCriteria, SearchField},
    search_request::SearchRequest,
};
use serde_json::{Value, json};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/device/event.json")
}

async fn fetch(base_url: &str, request: &SearchRequest) -> Result<Vec<Value>, SearchError> {
    let spec = build_request(base_url, request);
    OpenFdaClient::new().fetch_events(&spec).await
}

#[tokio::test]
async fn returns_results_array() {
    let router = Router::new().route(
        "/device/event.json",
        get(|RawQuery(query): RawQuery| async move {
            let query = query.unwrap_or_default();
            if query == "search=event_type:Malfunction&sort=date_received:desc&limit=100" {
                (StatusCode::OK, Json(json!({ "meta": {}, "results": [{ "event_type": "Malfunction" }] })))
            } else {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": { "code": "BAD_REQUEST", "message": query } })))
            }
        }),
    );
    let base = serve(router).await;

    let events = fetch(&base, &SearchRequest::TopMalfunctions).await.unwrap();
    assert_eq!(events, vec![json!({ "event_type": "Malfunction" })]);
}

#[tokio::test]
async fn date_range_reaches_provider_unescaped() {
    let router = Router::new().route(
        "/device/event.json",
        get(|RawQuery(query): RawQuery| async move {
            let query = query.unwrap_or_default();
            let status = if query.contains("+AND+date_received:[20200101+TO+20201231]") {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(json!({ "results": [] })))
        }),
    );
    let base = serve(router).await;

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
    )
    .unwrap();
    let request = SearchRequest::General(
        SearchCriteria::new(SearchField::GenericName, "pump", Some(range), 5).unwrap(),
    );
    assert!(fetch(&base, &request).await.unwrap().is_empty());
}

#[tokio::test]
async fn body_without_results_is_zero_matches() {
    let router = Router::new().route("/device/event.json", get(|| async { Json(json!({ "meta": {} })) }));
    let base = serve(router).await;

    assert!(fetch(&base, &SearchRequest::TopInjuries).await.unwrap().is_empty());
}

#[tokio::test]
async fn provider_not_found_is_zero_matches() {
    let router = Router::new().route(
        "/device/event.json",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": { "code": "NOT_FOUND", "message": "No matches found!" } })),
            )
        }),
    );
    let base = serve(router).await;

    assert!(fetch(&base, &SearchRequest::TopInjuries).await.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_is_a_transport_failure() {
    let router = Router::new().route(
        "/device/event.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database exploded") }),
    );
    let base = serve(router).await;

    let err = fetch(&base, &SearchRequest::TopInjuries).await.unwrap_err();
    assert!(err.is_transport());
    match err {
        SearchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
    // bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetch(&format!("http://{addr}/device/event.json"), &SearchRequest::TopInjuries)
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));
}
