//! Regression predictor boundary.
//!
//! The trained pipeline is opaque to the rest of the crate: anything that
//! maps a [`FeatureVector`] to a price implements [`Predictor`]. The shipped
//! implementation is [`linear::LinearPipeline`], loaded from a JSON artifact
//! by [`store::PredictorStore`].

pub mod linear;
pub mod store;

use crate::error::CoreError;
use crate::features::FeatureVector;

/// A loaded regression pipeline.
///
/// Implementations must be safe to share across concurrent requests; they
/// are only ever called through `&self`.
pub trait Predictor: Send + Sync {
    /// Predict a price for one feature row.
    fn predict(&self, features: &FeatureVector) -> Result<f64, CoreError>;
}

pub use linear::LinearPipeline;
pub use store::PredictorStore;
