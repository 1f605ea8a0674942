use std::sync::Arc;

use homeprice_core::predictor::PredictorStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The process-wide regression pipeline, loaded at most once.
    pub predictor: Arc<PredictorStore>,
}
