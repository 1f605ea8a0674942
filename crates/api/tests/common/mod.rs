#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use homeprice_api::config::ServerConfig;
use homeprice_api::router::build_app_router;
use homeprice_api::state::AppState;
use homeprice_core::error::CoreError;
use homeprice_core::features::FeatureVector;
use homeprice_core::predictor::{Predictor, PredictorStore};

/// Price returned by [`StubPredictor`].
pub const STUB_PRICE: f64 = 245_000.0;

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
        model_path: "does-not-exist/complete_pipeline.json".into(),
    }
}

/// Always predicts [`STUB_PRICE`].
pub struct StubPredictor;

impl Predictor for StubPredictor {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, CoreError> {
        Ok(STUB_PRICE)
    }
}

/// Build the full application router around `store`.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(store: PredictorStore) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        predictor: Arc::new(store),
    };
    build_app_router(state, &config)
}

/// App with a loaded stub predictor.
pub fn app_with_stub() -> Router {
    build_test_app(PredictorStore::with_predictor(Arc::new(StubPredictor)))
}

/// App whose artifact path does not exist.
pub fn app_without_model() -> Router {
    build_test_app(PredictorStore::new(test_config().model_path))
}

/// The valid high-quality house used across the HTTP tests.
pub fn valid_house() -> Value {
    json!({
        "OverallQual": 9,
        "GrLivArea": 2000,
        "1stFlrSF": 2000,
        "FullBath": 2,
        "TotRmsAbvGrd": 8,
        "YearBuilt": 2005,
        "LotArea": 8000,
        "KitchenQual": "Gd",
        "Foundation": "PConc",
        "ExterQual": "Gd",
        "Neighborhood": "NoRidge"
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// POST an arbitrary (possibly malformed) JSON payload.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
