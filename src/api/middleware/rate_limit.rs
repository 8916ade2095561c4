//! Per-IP rate limiting using the token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Time for one token to come back into the bucket at `per_second` requests per second.
fn replenish_period(per_second: u64) -> Result<Duration> {
    if per_second == 0 {
        anyhow::bail!("Rate limit values must be non-zero");
    }
    Ok(Duration::from_nanos((1_000_000_000 / per_second).max(1)))
}

/// Creates a rate limiter keyed by the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The router
/// must be served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/convert", get(convert_handler))
///     .layer(rate_limit::layer(10, 50)?);
/// ```
pub fn layer(per_second: u64, burst: u32) -> Result<RateLimitLayer<PeerIpKeyExtractor>> {
    let governor_conf = GovernorConfigBuilder::default()
        .period(replenish_period(per_second)?)
        .burst_size(burst)
        .finish()
        .context("Rate limit values must be non-zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Creates a rate limiter keyed by the client IP reported by a reverse proxy.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded` before falling back
/// to the peer address. Only safe behind a trusted proxy that overwrites
/// these headers.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
pub fn proxied_layer(per_second: u64, burst: u32) -> Result<RateLimitLayer<SmartIpKeyExtractor>> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .period(replenish_period(per_second)?)
        .burst_size(burst)
        .finish()
        .context("Rate limit values must be non-zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
