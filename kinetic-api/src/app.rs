/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use kinetic_api::{app::AppState, config::Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::connect(config)?;
/// let app = kinetic_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::SecurityHeadersLayer};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use kinetic_shared::{
    store::{RestStore, SignupStore},
    waitlist::{CountFetcher, SignupSubmitter},
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning; nothing in it is mutated after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// Signup write path
    pub submitter: SignupSubmitter,

    /// Signup count read path
    pub counter: CountFetcher,
}

impl AppState {
    /// Creates application state around an already-built store
    ///
    /// Pass `None` to run without a store; the waitlist endpoints then
    /// answer with a configuration error.
    pub fn new(config: Config, store: Option<Arc<dyn SignupStore>>) -> Self {
        Self {
            config: Arc::new(config),
            submitter: SignupSubmitter::new(store.clone()),
            counter: CountFetcher::new(store),
        }
    }

    /// Creates application state, connecting to the hosted store if configured
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the store cannot be built.
    pub fn connect(config: Config) -> anyhow::Result<Self> {
        let store = match &config.store {
            Some(store_config) => {
                let store: Arc<dyn SignupStore> = Arc::new(RestStore::new(store_config.clone())?);
                Some(store)
            }
            None => None,
        };

        Ok(Self::new(config, store))
    }

    /// Founding spots shown on the landing page
    pub fn capacity(&self) -> u64 {
        self.config.waitlist.capacity
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                      # Landing page (HTML)
/// ├── POST /waitlist              # Landing page form target (HTML)
/// ├── GET  /health                # Health check
/// └── /api/
///     ├── POST /waitlist          # JSON signup
///     └── GET  /waitlist-count    # JSON signup count
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Security headers
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let page_routes = Router::new()
        .route("/", get(routes::home::home_page))
        .route("/waitlist", post(routes::home::submit_form));

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let api_routes = Router::new()
        .route("/waitlist", post(routes::waitlist::submit_signup))
        .route("/waitlist-count", get(routes::waitlist_count::waitlist_count));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
