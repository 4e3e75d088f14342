#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use climate_api::config::ServerConfig;
use climate_api::router::build_app_router;
use climate_api::state::AppState;
use climate_core::evaluator::ReadingEvaluator;
use climate_core::secret::SharedSecretValidator;

/// Device secret accepted by [`build_test_app`].
pub const TEST_SECRET: &str = "greenhouse-7";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        device_secrets: vec![TEST_SECRET.to_string()],
    }
}

/// Build the full application router with the same middleware stack the
/// binary uses, accepting only [`TEST_SECRET`].
pub fn build_test_app() -> Router {
    let config = test_config();
    let validator = SharedSecretValidator::new(&config.device_secrets);

    let state = AppState {
        secrets_configured: validator.len(),
        evaluator: Arc::new(ReadingEvaluator::new(Arc::new(validator))),
    };

    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and an optional device secret header.
pub async fn post_reading(
    app: Router,
    secret: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/readings/evaluate")
        .header("content-type", "application/json");
    if let Some(secret) = secret {
        builder = builder.header("x-device-shared-secret", secret);
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
