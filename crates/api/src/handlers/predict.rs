//! Handlers for `/predict` and `/validate`.
//!
//! Both take the raw JSON body so field-level problems (wrong types, missing
//! fields) are reported by the validation engine with the offending field
//! named, rather than by the extractor.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use homeprice_core::pricing::{self, PredictedPrice};
use homeprice_core::validation::{self, ValidationError, ValidationReport};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(raw)| raw)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn log_rejection(err: &ValidationError) {
    match err {
        ValidationError::FieldConstraint(v) => {
            tracing::info!(
                field = %v.field,
                rule_type = %v.rule_type,
                "House rejected by field constraint"
            );
        }
        ValidationError::CrossField(v) => {
            tracing::info!(rule = v.rule.as_str(), "House rejected by cross-field rule");
        }
    }
}

/// POST /predict
///
/// Validate the house description (fail-fast), then run the regression
/// pipeline once. Validation failures are 400 with the first violation;
/// an unloadable pipeline is 500.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<PredictedPrice>> {
    let raw = json_body(body)?;

    let house = validation::validate(&raw).inspect_err(log_rejection)?;

    let predictor = state.predictor.get().await?;
    let price = pricing::predict_price(predictor.as_ref(), &house)?;

    tracing::info!(
        neighborhood = %house.neighborhood,
        predicted_price = price.predicted_price,
        "Predicted house price"
    );
    Ok(Json(price))
}

/// POST /validate
///
/// Dry-run: report every violation without running the pipeline. Always
/// 200 for a well-formed JSON body; `is_valid` carries the verdict.
pub async fn validate(
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationReport>>> {
    let raw = json_body(body)?;

    let report = validation::evaluate_all(&raw);
    tracing::debug!(
        is_valid = report.is_valid,
        violations = report.violations.len(),
        "Dry-run validation"
    );
    Ok(Json(DataResponse { data: report }))
}
