/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct. It is built once at startup and handed
/// to the handlers through `AppState`; nothing reads the environment after
/// that.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: `*`)
/// - `PRODUCTION`: Enables HSTS when `true`/`1` (default: false)
/// - `SUPABASE_URL`: Hosted store base URL
/// - `SUPABASE_ANON_KEY`: Hosted store API key
/// - `WAITLIST_TABLE`: Signups table (default: waitlist_signups)
/// - `WAITLIST_CAPACITY`: Founding spots shown on the page (default: 200)
/// - `RUST_LOG`: Log level (default: debug for this crate)
///
/// The store variables are not required to start. Without both of them the
/// server runs, and the waitlist endpoints answer with a configuration
/// error.
///
/// # Example
///
/// ```no_run
/// use kinetic_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use kinetic_shared::store::{rest::DEFAULT_TABLE, StoreConfig};
use serde::{Deserialize, Serialize};
use std::env;

/// Founding spots advertised when `WAITLIST_CAPACITY` is unset
pub const DEFAULT_CAPACITY: u64 = 200;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Hosted store connection, `None` when not configured
    pub store: Option<StoreConfig>,

    /// Waitlist presentation settings
    pub waitlist: WaitlistConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; `*` allows any
    pub cors_origins: Vec<String>,

    /// Production mode (enables HSTS)
    pub production: bool,
}

/// Waitlist presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistConfig {
    /// Number of founding spots
    pub capacity: u64,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable has an invalid value.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` or `WAITLIST_CAPACITY` cannot be
    /// parsed.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("API_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("API_PORT must be a valid port: {}", e))?;

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let production = var("PRODUCTION")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let store = match (var("SUPABASE_URL"), var("SUPABASE_ANON_KEY")) {
            (Some(url), Some(key)) => Some(
                StoreConfig::new(url, key)
                    .with_table(var("WAITLIST_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string())),
            ),
            _ => None,
        };

        let capacity = var("WAITLIST_CAPACITY")
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("WAITLIST_CAPACITY must be a non-negative integer: {}", e))?
            .unwrap_or(DEFAULT_CAPACITY);

        Ok(Self {
            api: ApiConfig {
                host,
                port,
                cors_origins,
                production,
            },
            store,
            waitlist: WaitlistConfig { capacity },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
