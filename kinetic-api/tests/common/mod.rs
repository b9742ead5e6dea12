/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - App construction over an in-memory store (or none at all)
/// - A local fake of the hosted signups table
/// - Request and body helpers

use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Request, Response, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use kinetic_api::app::{build_router, AppState};
use kinetic_api::config::Config;
use kinetic_shared::store::{MemoryStore, SignupStore};
use std::sync::{Arc, Mutex};
use tower::Service as _;

/// Test context containing the app and the store behind it
pub struct TestContext {
    pub app: Router,
    pub store: Option<Arc<MemoryStore>>,
}

impl TestContext {
    /// App backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// App backed by the given in-memory store
    pub fn with_store(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(test_config(&[]), Some(store.clone() as Arc<dyn SignupStore>));

        Self {
            app: build_router(state),
            store: Some(store),
        }
    }

    /// App with no store configured
    pub fn unconfigured() -> Self {
        Self {
            app: build_router(AppState::new(test_config(&[]), None)),
            store: None,
        }
    }

    /// The in-memory store; panics for unconfigured contexts
    pub fn store(&self) -> &MemoryStore {
        self.store.as_deref().expect("context has no store")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().call(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: impl Into<String>) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// Configuration built from explicit variables, never the process environment
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Config::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

/// Local stand-in for the hosted signups table
///
/// Accepts every insert and reports `0-N/N` for counts, where N is the
/// number of inserts received.
pub struct FakeStoreServer {
    pub base_url: String,
    pub inserted: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl FakeStoreServer {
    pub async fn start() -> Self {
        let inserted: Arc<Mutex<Vec<serde_json::Value>>> = Arc::new(Mutex::new(Vec::new()));

        let on_insert = {
            let inserted = inserted.clone();
            move |body: Bytes| {
                let inserted = inserted.clone();
                async move {
                    let row = serde_json::from_slice(&body).unwrap_or_default();
                    inserted.lock().unwrap().push(row);
                    StatusCode::CREATED
                }
            }
        };

        let on_count = {
            let inserted = inserted.clone();
            move || {
                let inserted = inserted.clone();
                async move {
                    let total = inserted.lock().unwrap().len();
                    let range = format!("0-{}/{}", total.saturating_sub(1), total);
                    let mut response = (StatusCode::OK, "[]").into_response();
                    response
                        .headers_mut()
                        .insert("content-range", HeaderValue::from_str(&range).unwrap());
                    response
                }
            }
        };

        let app = Router::new().route("/rest/v1/waitlist_signups", post(on_insert).get(on_count));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            inserted,
        }
    }
}
