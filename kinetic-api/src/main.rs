//! # Kinetic API Server
//!
//! Serves the Kinetic landing page and the waitlist endpoints.
//!
//! ## Architecture
//!
//! The server is built with Axum and provides:
//! - The landing page, with a script-free signup form
//! - JSON signup and count endpoints for other clients
//! - A proxy to the hosted signups table (no local storage)
//!
//! ## Usage
//!
//! ```bash
//! SUPABASE_URL=https://<project>.supabase.co SUPABASE_ANON_KEY=... cargo run -p kinetic-api
//! ```

use kinetic_api::{
    app::{build_router, AppState},
    config::Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "kinetic_api=debug,kinetic_shared=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Kinetic API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    match &config.store {
        Some(store) => tracing::info!(
            base_url = %store.base_url,
            table = %store.table,
            "waitlist store configured"
        ),
        None => tracing::warn!(
            url_present = std::env::var("SUPABASE_URL").is_ok_and(|v| !v.trim().is_empty()),
            key_present = std::env::var("SUPABASE_ANON_KEY").is_ok_and(|v| !v.trim().is_empty()),
            "waitlist store not configured; signups will fail"
        ),
    }

    let bind_address = config.bind_address();
    let state = AppState::connect(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Never resolves, so the server keeps running
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
