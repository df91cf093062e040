use std::{
    collections::HashMap,
    net::TcpListener,
    sync::{Arc, Mutex},
    thread,
};

use axum::{Router, extract::Query, http::StatusCode as FixtureStatus, http::Uri, routing::get};
use clitube::{
    error::{SearchError, UpdateError},
    player::update::{HttpFetcher, RemoteFetcher},
    types::SearchQuery,
    youtube::{SearchService, YoutubeClient},
};
use reqwest::StatusCode;

type Seen = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

// Local HTTP server answering `route` with a fixed status and body.
// Every request's path and query parameters are recorded.
struct Fixture {
    base_url: String,
    seen: Seen,
}

fn serve(route: &'static str, status: u16, body: &'static str) -> Fixture {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let status = FixtureStatus::from_u16(status).unwrap();

    let app = Router::new().route(
        route,
        get(
            move |uri: Uri, Query(params): Query<HashMap<String, String>>| {
                let recorder = Arc::clone(&recorder);
                async move {
                    recorder
                        .lock()
                        .unwrap()
                        .push((uri.path().to_string(), params));
                    (status, body)
                }
            },
        ),
    );

    // The blocking client must not run inside a tokio runtime, so the server
    // gets a thread and runtime of its own
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    Fixture { base_url, seen }
}

fn query(tokens: &[&str]) -> SearchQuery {
    SearchQuery::from_tokens(tokens).unwrap()
}

#[test]
fn test_search_request_shape() {
    let fixture = serve(
        "/v3/search",
        200,
        r#"{"items":[{"id":{"videoId":"abc123"},"snippet":{"title":"Song X"}}]}"#,
    );
    // Trailing slash on the base URL must not produce a double slash
    let client = YoutubeClient::new(format!("{}/v3/", fixture.base_url), "test-key", 10);

    let raw = client.search(&query(&["daft", "punk", "harder"])).unwrap();

    assert_eq!(raw["items"][0]["id"]["videoId"], "abc123");

    let seen = fixture.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (path, params) = &seen[0];
    assert_eq!(path, "/v3/search");
    assert_eq!(params.get("part").map(String::as_str), Some("id,snippet"));
    assert_eq!(params.get("q").map(String::as_str), Some("daft punk harder"));
    assert_eq!(params.get("maxResults").map(String::as_str), Some("10"));
    assert_eq!(params.get("key").map(String::as_str), Some("test-key"));
}

#[test]
fn test_search_rejection_keeps_body() {
    let fixture = serve(
        "/search",
        403,
        r#"{"error":{"code":403,"message":"API key not valid"}}"#,
    );
    let client = YoutubeClient::new(fixture.base_url.clone(), "bad-key", 10);

    let err = client.search(&query(&["anything"])).unwrap_err();

    match err {
        SearchError::Status { status, body } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert!(body.contains("API key not valid"), "body: {body}");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn test_search_undecodable_body() {
    let fixture = serve("/search", 200, "<html>not json</html>");
    let client = YoutubeClient::new(fixture.base_url.clone(), "test-key", 10);

    let err = client.search(&query(&["anything"])).unwrap_err();

    assert!(matches!(err, SearchError::Decode(_)));
}

#[test]
fn test_search_unreachable_server() {
    // Reserve a port, then free it so nothing listens there
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = YoutubeClient::new(format!("http://{addr}"), "test-key", 10);

    let err = client.search(&query(&["anything"])).unwrap_err();

    assert!(matches!(err, SearchError::Request(_)));
}

#[test]
fn test_fetch_script() {
    let fixture = serve("/youtube.lua", 200, "-- youtube.lua");
    let fetcher = HttpFetcher::new();

    let bytes = fetcher
        .fetch(&format!("{}/youtube.lua", fixture.base_url))
        .unwrap();

    assert_eq!(bytes, b"-- youtube.lua");
}

#[test]
fn test_fetch_script_not_found() {
    let fixture = serve("/youtube.lua", 404, "not found");
    let fetcher = HttpFetcher::new();

    let err = fetcher
        .fetch(&format!("{}/youtube.lua", fixture.base_url))
        .unwrap_err();

    assert!(matches!(err, UpdateError::Status(StatusCode::NOT_FOUND)));
}
