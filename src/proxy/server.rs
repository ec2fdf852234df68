//! HTTP proxy server.
//!
//! Exposes the context endpoints and forwards each request to the upstream
//! memory service. Credentials are loaded once before the server is built
//! and shared as read-only state; mid-run rotation is not supported.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Credentials;

use super::insert;

/// Default upstream memory service base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/memories";

/// Environment variable overriding the upstream base URL.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Default bound on a single upstream call; expiry surfaces as 504.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the proxy server.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Upstream memory service base URL (no trailing slash).
    pub base_url: String,
    /// Whether to enable CORS.
    pub enable_cors: bool,
    /// Bound on a single upstream call; expiry surfaces as 504.
    pub upstream_timeout: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            base_url: DEFAULT_BASE_URL.to_string(),
            enable_cors: true,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

impl ProxyConfig {
    /// Config for `port`, with the base URL taken from `BASE_URL` when set.
    pub fn from_env(port: u16) -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            port,
            base_url,
            ..Self::default()
        }
    }
}

/// Read-only state shared across request handlers.
pub(crate) struct ProxyState {
    pub client: reqwest::Client,
    pub base_url: String,
    pub credentials: Credentials,
}

/// The proxy server: router construction plus serve loops.
pub struct ProxyServer {
    config: ProxyConfig,
    state: Arc<ProxyState>,
}

impl ProxyServer {
    /// Build a server from config and already-loaded credentials.
    ///
    /// Callers load credentials before constructing the server so a missing
    /// or malformed config file fails startup instead of producing
    /// unauthenticated upstream requests.
    pub fn new(config: ProxyConfig, credentials: Credentials) -> DomainResult<Self> {
        if credentials.is_empty() {
            warn!("credentials are empty; upstream requests will carry blank headers");
        }
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|err| DomainError::UpstreamUnreachable(err.to_string()))?;
        let state = Arc::new(ProxyState {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        });
        Ok(Self { config, state })
    }

    /// Build the axum router (exposed for in-process tests).
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/context/insert", post(insert::insert_context))
            .route("/health", get(health))
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.state));

        if self.config.enable_cors {
            router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            router
        }
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.router();
        info!(%addr, base_url = %self.state.base_url, "proxy listening");
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;
        Ok(())
    }

    /// Serve until the provided shutdown future resolves.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.router();
        info!(%addr, base_url = %self.state.base_url, "proxy listening");
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
