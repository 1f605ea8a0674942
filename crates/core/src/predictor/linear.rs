//! Linear regression pipeline loaded from a JSON artifact.
//!
//! The artifact bundles the whole preprocessing chain the model was fitted
//! with: median imputation and standard scaling for numeric columns, one-hot
//! weights for categorical columns, and an optional log-target transform.
//!
//! ```json
//! {
//!   "intercept": 12.02,
//!   "log_target": true,
//!   "numeric": {
//!     "OverallQual": { "impute": 6.0, "mean": 6.1, "scale": 1.38, "weight": 0.13 }
//!   },
//!   "categorical": {
//!     "KitchenQual": { "Ex": 0.09, "Gd": 0.02, "TA": -0.03 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Predictor;
use crate::error::CoreError;
use crate::features::{FeatureValue, FeatureVector, CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};

/// Preprocessing and weight for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTerm {
    /// Substituted when the value is missing.
    pub impute: f64,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub weight: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// Fitted linear pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPipeline {
    pub intercept: f64,
    /// When set, the model was fitted on `ln(price)`.
    #[serde(default)]
    pub log_target: bool,
    #[serde(default)]
    pub numeric: BTreeMap<String, NumericTerm>,
    /// Per-column category weights. Unseen or missing categories contribute
    /// nothing.
    #[serde(default)]
    pub categorical: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LinearPipeline {
    /// Parse and check an artifact.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        let pipeline: Self = serde_json::from_slice(bytes).map_err(|e| {
            CoreError::PredictorUnavailable(format!("Invalid pipeline artifact: {e}"))
        })?;
        pipeline.check()?;
        Ok(pipeline)
    }

    /// Reject artifacts that reference columns the feature frame does not
    /// have, or that could never produce a finite price.
    fn check(&self) -> Result<(), CoreError> {
        let invalid = |msg: String| {
            CoreError::PredictorUnavailable(format!("Invalid pipeline artifact: {msg}"))
        };

        if !self.intercept.is_finite() {
            return Err(invalid("intercept is not finite".into()));
        }
        for (column, term) in &self.numeric {
            if !NUMERIC_COLUMNS.contains(&column.as_str()) {
                return Err(invalid(format!("unknown numeric column '{column}'")));
            }
            if term.scale == 0.0 || !term.scale.is_finite() {
                return Err(invalid(format!(
                    "column '{column}' has a zero or non-finite scale"
                )));
            }
            if !(term.impute.is_finite() && term.mean.is_finite() && term.weight.is_finite()) {
                return Err(invalid(format!("column '{column}' has non-finite parameters")));
            }
        }
        for (column, weights) in &self.categorical {
            if !CATEGORICAL_COLUMNS.contains(&column.as_str()) {
                return Err(invalid(format!("unknown categorical column '{column}'")));
            }
            if weights.values().any(|w| !w.is_finite()) {
                return Err(invalid(format!("column '{column}' has non-finite weights")));
            }
        }
        Ok(())
    }
}

impl Predictor for LinearPipeline {
    fn predict(&self, features: &FeatureVector) -> Result<f64, CoreError> {
        let mut raw = self.intercept;

        for (column, term) in &self.numeric {
            let x = match features.get(column) {
                Some(FeatureValue::Number(x)) => *x,
                Some(FeatureValue::Missing) => term.impute,
                _ => {
                    return Err(CoreError::Internal(format!(
                        "column '{column}' is not numeric in the feature vector"
                    )))
                }
            };
            raw += term.weight * (x - term.mean) / term.scale;
        }

        for (column, weights) in &self.categorical {
            match features.get(column) {
                Some(FeatureValue::Category(value)) => {
                    raw += weights.get(value).copied().unwrap_or(0.0);
                }
                Some(FeatureValue::Missing) => {}
                _ => {
                    return Err(CoreError::Internal(format!(
                        "column '{column}' is not categorical in the feature vector"
                    )))
                }
            }
        }

        Ok(if self.log_target { raw.exp() } else { raw })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::house::*;
    use crate::validation::test_support::scenario_house;

    fn pipeline(value: serde_json::Value) -> Result<LinearPipeline, CoreError> {
        LinearPipeline::from_json(value.to_string().as_bytes())
    }

    #[test]
    fn numeric_terms_are_scaled_and_weighted() {
        let p = pipeline(json!({
            "intercept": 1000.0,
            "numeric": {
                "GrLivArea": { "impute": 1500.0, "mean": 1000.0, "scale": 500.0, "weight": 10.0 }
            }
        }))
        .unwrap();
        let features = FeatureVector::from_house(&scenario_house());
        // (2000 - 1000) / 500 * 10 = 20
        assert_eq!(p.predict(&features).unwrap(), 1020.0);
    }

    #[test]
    fn missing_numeric_uses_imputed_value() {
        let p = pipeline(json!({
            "intercept": 0.0,
            "numeric": { "GarageArea": { "impute": 480.0, "weight": 100.0 } }
        }))
        .unwrap();
        let mut house = scenario_house();
        assert_eq!(p.predict(&FeatureVector::from_house(&house)).unwrap(), 48_000.0);

        house.garage_area = Some(0);
        house.garage_cars = Some(0);
        assert_eq!(p.predict(&FeatureVector::from_house(&house)).unwrap(), 0.0);
    }

    #[test]
    fn categories_add_their_weight_and_unknowns_add_nothing() {
        let p = pipeline(json!({
            "intercept": 100.0,
            "categorical": {
                "Neighborhood": { "NoRidge": 50.0 },
                "Electrical": { "SBrkr": 5.0 }
            }
        }))
        .unwrap();
        let mut house = scenario_house();
        assert_eq!(p.predict(&FeatureVector::from_house(&house)).unwrap(), 150.0);

        house.neighborhood = "Nowhere".to_string();
        house.electrical = Some(ElectricalSystem::SBrkr);
        assert_eq!(p.predict(&FeatureVector::from_house(&house)).unwrap(), 105.0);
    }

    #[test]
    fn log_target_is_exponentiated() {
        let p = pipeline(json!({ "intercept": 0.0, "log_target": true })).unwrap();
        let features = FeatureVector::from_house(&scenario_house());
        assert_eq!(p.predict(&features).unwrap(), 1.0);
    }

    #[test]
    fn unknown_column_is_rejected_at_load() {
        assert_matches!(
            pipeline(json!({ "intercept": 0.0, "numeric": { "PoolArea": { "impute": 0.0, "weight": 1.0 } } })),
            Err(CoreError::PredictorUnavailable(msg)) if msg.contains("PoolArea")
        );
    }

    #[test]
    fn categorical_column_cannot_be_numeric() {
        assert_matches!(
            pipeline(json!({ "intercept": 0.0, "numeric": { "KitchenQual": { "impute": 0.0, "weight": 1.0 } } })),
            Err(CoreError::PredictorUnavailable(_))
        );
    }

    #[test]
    fn zero_scale_is_rejected_at_load() {
        assert_matches!(
            pipeline(json!({
                "intercept": 0.0,
                "numeric": { "LotArea": { "impute": 0.0, "scale": 0.0, "weight": 1.0 } }
            })),
            Err(CoreError::PredictorUnavailable(_))
        );
    }

    #[test]
    fn malformed_json_is_unavailable() {
        assert_matches!(
            LinearPipeline::from_json(b"not json"),
            Err(CoreError::PredictorUnavailable(msg)) if msg.starts_with("Invalid pipeline artifact")
        );
    }
}
