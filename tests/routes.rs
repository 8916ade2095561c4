mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Router, extract::ConnectInfo};
use axum_test::TestServer;
use path_trade_tools::api::middleware::rate_limit;
use path_trade_tools::api::routes::public_routes;
use path_trade_tools::config::Config;
use path_trade_tools::routes::app_router;
use std::net::SocketAddr;
use std::time::Duration;
use tower::{Layer, ServiceExt};

#[derive(Clone)]
struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

fn test_config(behind_proxy: bool) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy,
        rate_limit_per_second: 10,
        rate_limit_burst: 50,
        db_max_connections: 1,
        db_connect_timeout: 5,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
    }
}

#[tokio::test]
async fn test_app_router_serves_api_with_trailing_slash() {
    let pool = common::setup_pool().await;
    common::standard_prices(&pool).await;
    let state = common::create_test_state(pool);

    let app = app_router(state, &test_config(true)).unwrap();

    let request = Request::builder()
        .uri("/api/prices/divine/")
        .header("X-Forwarded-For", "203.0.113.7")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["exalted_value"], 400.0);
}

#[tokio::test]
async fn test_app_router_rejects_zero_rate_limit() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool);

    let mut config = test_config(false);
    config.rate_limit_burst = 0;

    assert!(app_router(state, &config).is_err());
}

#[tokio::test]
async fn test_rate_limit_by_peer_address() {
    let pool = common::setup_pool().await;
    common::standard_prices(&pool).await;
    let state = common::create_test_state(pool);

    let app = Router::new()
        .nest(
            "/api",
            public_routes().layer(rate_limit::layer(1, 2).unwrap()),
        )
        .layer(MockConnectInfoLayer)
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server.get("/api/prices/exalt").await.assert_status_ok();
    server.get("/api/prices/exalt").await.assert_status_ok();

    let response = server.get("/api/prices/exalt").await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_refills_at_configured_rate() {
    let pool = common::setup_pool().await;
    common::standard_prices(&pool).await;
    let state = common::create_test_state(pool);

    // 10 requests per second: one token back every 100 ms
    let app = Router::new()
        .nest(
            "/api",
            public_routes().layer(rate_limit::layer(10, 1).unwrap()),
        )
        .layer(MockConnectInfoLayer)
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server.get("/api/prices/exalt").await.assert_status_ok();
    server
        .get("/api/prices/exalt")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    tokio::time::sleep(Duration::from_millis(300)).await;

    server.get("/api/prices/exalt").await.assert_status_ok();
}

#[tokio::test]
async fn test_rate_limit_per_forwarded_client() {
    let pool = common::setup_pool().await;
    common::standard_prices(&pool).await;
    let state = common::create_test_state(pool);

    let app = Router::new()
        .nest(
            "/api",
            public_routes().layer(rate_limit::proxied_layer(1, 1).unwrap()),
        )
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .get("/api/prices/exalt")
        .add_header("X-Forwarded-For", "198.51.100.1")
        .await
        .assert_status_ok();

    server
        .get("/api/prices/exalt")
        .add_header("X-Forwarded-For", "198.51.100.1")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    // A different client has its own bucket
    server
        .get("/api/prices/exalt")
        .add_header("X-Forwarded-For", "198.51.100.2")
        .await
        .assert_status_ok();
}
