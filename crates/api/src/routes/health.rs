use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "house-price-prediction";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `healthy` when the predictor is loaded, `degraded` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the regression pipeline is loaded and ready.
    pub model_loaded: bool,
}

/// Root banner payload.
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

/// GET /health -- liveness plus predictor readiness. Never loads anything.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_loaded = state.predictor.is_loaded();

    let status = if model_loaded { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        model_loaded,
    })
}

/// GET / -- service banner.
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "House Price Prediction API",
    })
}

/// Mount health and banner routes at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
}
