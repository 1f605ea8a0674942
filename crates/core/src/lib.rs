//! House price prediction core.
//!
//! Domain types, the validation engine, the feature vector handed to the
//! regression pipeline, and the predictor boundary. No HTTP concerns.

pub mod error;
pub mod features;
pub mod house;
pub mod predictor;
pub mod pricing;
pub mod validation;
