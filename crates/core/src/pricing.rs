//! Price prediction for a validated house.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::features::FeatureVector;
use crate::house::HouseRecord;
use crate::predictor::Predictor;

/// The outcome of one inference call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedPrice {
    /// Predicted price in USD.
    pub predicted_price: f64,
}

/// Build the feature row for `house`, run the predictor once, and wrap the
/// result.
///
/// A negative or non-finite output is a fault in the pipeline, not a price.
pub fn predict_price(
    predictor: &dyn Predictor,
    house: &HouseRecord,
) -> Result<PredictedPrice, CoreError> {
    let features = FeatureVector::from_house(house);
    let price = predictor.predict(&features)?;

    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Internal(format!(
            "Predictor returned an invalid price: {price}"
        )));
    }

    Ok(PredictedPrice {
        predicted_price: price,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;

    use super::*;
    use crate::validation::test_support::scenario_house;

    /// Returns a fixed price and counts invocations.
    struct FixedPredictor {
        price: f64,
        calls: AtomicUsize,
    }

    impl FixedPredictor {
        fn new(price: f64) -> Self {
            Self {
                price,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Predictor for FixedPredictor {
        fn predict(&self, features: &FeatureVector) -> Result<f64, CoreError> {
            assert_eq!(features.len(), 23);
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.price)
        }
    }

    #[test]
    fn wraps_the_predictor_output() {
        let predictor = FixedPredictor::new(245_000.0);
        let price = predict_price(&predictor, &scenario_house()).unwrap();
        assert_eq!(price.predicted_price, 245_000.0);
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_is_a_valid_price() {
        let predictor = FixedPredictor::new(0.0);
        assert!(predict_price(&predictor, &scenario_house()).is_ok());
    }

    #[test]
    fn negative_price_is_an_internal_fault() {
        let predictor = FixedPredictor::new(-1.0);
        assert_matches!(
            predict_price(&predictor, &scenario_house()),
            Err(CoreError::Internal(_))
        );
    }

    #[test]
    fn non_finite_price_is_an_internal_fault() {
        for bad in [f64::NAN, f64::INFINITY] {
            let predictor = FixedPredictor::new(bad);
            assert_matches!(
                predict_price(&predictor, &scenario_house()),
                Err(CoreError::Internal(_))
            );
        }
    }

    #[test]
    fn serializes_as_predicted_price_object() {
        let json = serde_json::to_value(PredictedPrice {
            predicted_price: 1.5,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "predicted_price": 1.5 }));
    }
}
