/// Common test utilities for store integration tests
///
/// Provides a throwaway HTTP server that plays the hosted signups table:
/// - Records every request it receives
/// - Answers inserts and counts with canned responses

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::sync::{Arc, Mutex};

/// A request as seen by the fake upstream
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: &'static str,
    pub headers: HeaderMap,
    pub query: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Canned responses for the fake upstream
#[derive(Debug, Clone)]
pub struct UpstreamBehavior {
    pub insert_status: StatusCode,
    pub insert_body: String,
    pub count_status: StatusCode,
    pub content_range: Option<&'static str>,
}

impl Default for UpstreamBehavior {
    fn default() -> Self {
        Self {
            insert_status: StatusCode::CREATED,
            insert_body: String::new(),
            count_status: StatusCode::OK,
            content_range: Some("0-9/37"),
        }
    }
}

#[derive(Clone)]
struct UpstreamState {
    behavior: UpstreamBehavior,
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Running fake upstream
pub struct FakeUpstream {
    pub base_url: String,
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeUpstream {
    /// Starts a server on an ephemeral port
    pub async fn start(behavior: UpstreamBehavior) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            behavior,
            seen: seen.clone(),
        };

        let app = Router::new()
            .route("/rest/v1/waitlist_signups", post(insert).get(count))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            seen,
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn insert(State(state): State<UpstreamState>, headers: HeaderMap, body: Bytes) -> Response {
    state.seen.lock().unwrap().push(CapturedRequest {
        method: "POST",
        headers,
        query: None,
        body: serde_json::from_slice(&body).ok(),
    });

    (state.behavior.insert_status, state.behavior.insert_body.clone()).into_response()
}

async fn count(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    state.seen.lock().unwrap().push(CapturedRequest {
        method: "GET",
        headers,
        query,
        body: None,
    });

    let mut response = (state.behavior.count_status, "[]").into_response();
    if let Some(range) = state.behavior.content_range {
        response
            .headers_mut()
            .insert("content-range", HeaderValue::from_static(range));
    }
    response
}
