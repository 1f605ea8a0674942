pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the prediction route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /predict     -> predict   (validate, then infer)
/// POST /validate    -> validate  (dry-run, every violation)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/validate", post(handlers::predict::validate))
}
