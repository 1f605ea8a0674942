//! House validation engine.
//!
//! Field constraints, cross-field rules, and the pipeline that runs them in
//! order. Pure logic with no I/O.

pub mod fields;
pub mod pipeline;
pub mod rules;

pub use pipeline::{evaluate_all, validate, ValidationError, ValidationReport};

#[cfg(test)]
pub(crate) mod test_support;
