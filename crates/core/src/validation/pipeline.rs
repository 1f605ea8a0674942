//! Validation entry points.
//!
//! Two ordered stages: [`fields::parse_house`] turns the raw JSON object into
//! a typed record, then the cross-field rules run over that record. Both
//! stages are pure, so validating the same input twice always gives the same
//! outcome.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{self, FieldViolation, RULE_TYPE_CHECK};
use super::rules::{self, RuleViolation};
use crate::house::HouseRecord;

/// Pseudo field name used when the input is not a JSON object at all.
pub const BODY_FIELD: &str = "body";

/// Why a house description was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A single field is out of its declared type, range, or literal set.
    #[error("{}", .0.message)]
    FieldConstraint(FieldViolation),

    /// A cross-field rule failed.
    #[error("{}", .0.message)]
    CrossField(RuleViolation),
}

/// Result of an exhaustive dry-run over one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<ValidationError>,
}

fn not_an_object(raw: &Value) -> FieldViolation {
    FieldViolation {
        field: BODY_FIELD.to_string(),
        rule_type: RULE_TYPE_CHECK.to_string(),
        message: "Request body must be a JSON object".to_string(),
        value: Some(raw.clone()),
    }
}

/// Validate a raw house description, stopping at the first failure.
///
/// Field constraints short-circuit the cross-field rules: the rules only see
/// records whose fields are individually valid.
pub fn validate(raw: &Value) -> Result<HouseRecord, ValidationError> {
    let Value::Object(data) = raw else {
        return Err(ValidationError::FieldConstraint(not_an_object(raw)));
    };

    let house = fields::parse_house(data).map_err(|violations| {
        // parse_house never fails with an empty list.
        let first = violations
            .into_iter()
            .next()
            .unwrap_or_else(|| not_an_object(raw));
        ValidationError::FieldConstraint(first)
    })?;

    rules::first_violation(&house).map_err(ValidationError::CrossField)?;

    Ok(house)
}

/// Validate a raw house description and report every violation.
///
/// Field violations are all reported; cross-field rules only run when every
/// field passed, mirroring [`validate`]. The first entry of the report is
/// always the error [`validate`] would return.
pub fn evaluate_all(raw: &Value) -> ValidationReport {
    let violations = match raw {
        Value::Object(data) => match fields::parse_house(data) {
            Ok(house) => rules::all_violations(&house)
                .into_iter()
                .map(ValidationError::CrossField)
                .collect(),
            Err(field_violations) => field_violations
                .into_iter()
                .map(ValidationError::FieldConstraint)
                .collect(),
        },
        _ => vec![ValidationError::FieldConstraint(not_an_object(raw))],
    };

    ValidationReport {
        is_valid: violations.is_empty(),
        violations,
    }
}
