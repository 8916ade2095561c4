//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*` - REST API (public, rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::rate_limit;
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// When `config.behind_proxy` is set, rate limiting reads the client IP from
/// `X-Forwarded-For` / `X-Real-IP` instead of the peer socket address.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let (per_second, burst) = (config.rate_limit_per_second, config.rate_limit_burst);

    let api_router = if config.behind_proxy {
        api::routes::public_routes().layer(rate_limit::proxied_layer(per_second, burst)?)
    } else {
        api::routes::public_routes().layer(rate_limit::layer(per_second, burst)?)
    };

    let router = Router::new()
        .nest("/api", api_router)
        .with_state(state)
        .layer(api::middleware::tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
