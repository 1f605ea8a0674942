use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Predictor unavailable: {0}")]
    PredictorUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
