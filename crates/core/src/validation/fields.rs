//! Field-level constraints: the typed-parse stage.
//!
//! Each field is checked on its own, against its declared type, range, or
//! literal set. Cross-field rules never see a record unless every field
//! passed here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::house::*;

// ---------------------------------------------------------------------------
// Constraint kinds
// ---------------------------------------------------------------------------

/// Rule type recorded on a [`FieldViolation`] for a missing mandatory field.
pub const RULE_REQUIRED: &str = "required";
/// Rule type for a value of the wrong JSON type.
pub const RULE_TYPE_CHECK: &str = "type_check";
/// Rule type for an integer outside its bounds.
pub const RULE_RANGE: &str = "range";
/// Rule type for a literal outside the accepted set.
pub const RULE_ENUM_VALUES: &str = "enum_values";
/// Rule type for a string shorter than its minimum.
pub const RULE_MIN_LENGTH: &str = "min_length";

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldViolation {
    fn new(field: &str, rule_type: &str, message: String, value: Option<&Value>) -> Self {
        Self {
            field: field.to_string(),
            rule_type: rule_type.to_string(),
            message,
            value: value.cloned(),
        }
    }
}

/// Inclusive bounds for an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntBounds {
    /// `min <= v <= max`.
    Between(i64, i64),
    /// `v >= min`.
    AtLeast(i64),
    /// `v > 0`.
    Positive,
}

impl IntBounds {
    pub fn contains(self, value: i64) -> bool {
        match self {
            IntBounds::Between(min, max) => (min..=max).contains(&value),
            IntBounds::AtLeast(min) => value >= min,
            IntBounds::Positive => value > 0,
        }
    }

    fn describe(self) -> String {
        match self {
            IntBounds::Between(min, max) => format!("must be between {min} and {max}"),
            IntBounds::AtLeast(min) => format!("must be {min} or greater"),
            IntBounds::Positive => "must be greater than 0".to_string(),
        }
    }
}

const YEAR_BOUNDS: IntBounds = IntBounds::Between(1800, 2025);

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Reads typed values out of a raw JSON object, recording every violation.
///
/// Failed reads yield a placeholder so the caller can keep building; the
/// record is discarded by [`FieldReader::finish`] if anything was recorded.
struct FieldReader<'a> {
    data: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    fn new(data: &'a Map<String, Value>) -> Self {
        Self {
            data,
            violations: Vec::new(),
        }
    }

    /// The field's value, treating JSON `null` as absent.
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.data.get(field).filter(|v| !v.is_null())
    }

    fn missing(&mut self, field: &str) {
        self.violations.push(FieldViolation::new(
            field,
            RULE_REQUIRED,
            format!("{field} is required"),
            None,
        ));
    }

    fn int(&mut self, field: &str, bounds: IntBounds) -> Option<i64> {
        let raw = self.present(field)?;
        let value = match coerce_integer(raw) {
            Coerced::Int(value) => value,
            Coerced::OutOfRange => {
                self.violations.push(FieldViolation::new(
                    field,
                    RULE_RANGE,
                    format!(
                        "{field} must be between {} and {}, got {raw}",
                        i64::MIN,
                        i64::MAX
                    ),
                    Some(raw),
                ));
                return None;
            }
            Coerced::NotInteger => {
                self.violations.push(FieldViolation::new(
                    field,
                    RULE_TYPE_CHECK,
                    format!("{field} must be an integer"),
                    Some(raw),
                ));
                return None;
            }
        };
        if !bounds.contains(value) {
            self.violations.push(FieldViolation::new(
                field,
                RULE_RANGE,
                format!("{field} {}, got {value}", bounds.describe()),
                Some(raw),
            ));
            return None;
        }
        Some(value)
    }

    fn required_int(&mut self, field: &str, bounds: IntBounds) -> i64 {
        if self.present(field).is_none() {
            self.missing(field);
            return 0;
        }
        self.int(field, bounds).unwrap_or_default()
    }

    fn optional_int(&mut self, field: &str, bounds: IntBounds) -> Option<i64> {
        self.int(field, bounds)
    }

    fn choice<T: Choice>(&mut self, field: &str) -> Option<T> {
        let raw = self.present(field)?;
        let Some(literal) = raw.as_str() else {
            self.violations.push(FieldViolation::new(
                field,
                RULE_TYPE_CHECK,
                format!("{field} must be a string"),
                Some(raw),
            ));
            return None;
        };
        let parsed = T::parse(literal);
        if parsed.is_none() {
            self.violations.push(FieldViolation::new(
                field,
                RULE_ENUM_VALUES,
                format!(
                    "{field} must be one of {}, got '{literal}'",
                    T::VARIANTS.join(", ")
                ),
                Some(raw),
            ));
        }
        parsed
    }

    fn required_choice<T: Choice>(&mut self, field: &str) -> T {
        if self.present(field).is_none() {
            self.missing(field);
            return T::default();
        }
        self.choice(field).unwrap_or_default()
    }

    fn optional_choice<T: Choice>(&mut self, field: &str) -> Option<T> {
        self.choice(field)
    }

    fn required_text(&mut self, field: &str, min_len: usize) -> String {
        let Some(raw) = self.present(field) else {
            self.missing(field);
            return String::new();
        };
        let Some(text) = raw.as_str() else {
            self.violations.push(FieldViolation::new(
                field,
                RULE_TYPE_CHECK,
                format!("{field} must be a string"),
                Some(raw),
            ));
            return String::new();
        };
        if text.chars().count() < min_len {
            self.violations.push(FieldViolation::new(
                field,
                RULE_MIN_LENGTH,
                format!("{field} must be at least {min_len} character(s) long"),
                Some(raw),
            ));
            return String::new();
        }
        text.to_string()
    }

    fn finish(self, record: HouseRecord) -> Result<HouseRecord, Vec<FieldViolation>> {
        if self.violations.is_empty() {
            Ok(record)
        } else {
            Err(self.violations)
        }
    }
}

/// Outcome of reading a JSON value as an integer.
#[derive(Debug, PartialEq)]
enum Coerced {
    Int(i64),
    /// A whole number that does not fit in `i64`.
    OutOfRange,
    NotInteger,
}

/// Accept JSON integers, and floats with no fractional part.
fn coerce_integer(value: &Value) -> Coerced {
    let Value::Number(number) = value else {
        return Coerced::NotInteger;
    };
    if let Some(i) = number.as_i64() {
        return Coerced::Int(i);
    }
    if number.is_u64() {
        return Coerced::OutOfRange;
    }
    let Some(f) = number.as_f64() else {
        return Coerced::NotInteger;
    };
    if !f.is_finite() || f.fract() != 0.0 {
        return Coerced::NotInteger;
    }
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Coerced::Int(f as i64)
    } else {
        Coerced::OutOfRange
    }
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

/// Parse a raw JSON object into a [`HouseRecord`], applying every field
/// constraint.
///
/// Fields are checked in declaration order (mandatory first). On failure the
/// violations are returned in that same order, so the first element is the
/// first failing field. Keys not belonging to the record are ignored.
pub fn parse_house(data: &Map<String, Value>) -> Result<HouseRecord, Vec<FieldViolation>> {
    let mut r = FieldReader::new(data);

    let record = HouseRecord {
        overall_qual: r.required_int(OVERALL_QUAL, IntBounds::Between(1, 10)),
        gr_liv_area: r.required_int(GR_LIV_AREA, IntBounds::Positive),
        first_flr_sf: r.required_int(FIRST_FLR_SF, IntBounds::Positive),
        full_bath: r.required_int(FULL_BATH, IntBounds::Between(0, 5)),
        tot_rms_abv_grd: r.required_int(TOT_RMS_ABV_GRD, IntBounds::Between(0, 20)),
        year_built: r.required_int(YEAR_BUILT, YEAR_BOUNDS),
        lot_area: r.required_int(LOT_AREA, IntBounds::Positive),
        kitchen_qual: r.required_choice(KITCHEN_QUAL),
        foundation: r.required_choice(FOUNDATION),
        exter_qual: r.required_choice(EXTER_QUAL),
        neighborhood: r.required_text(NEIGHBORHOOD, 1),

        year_remod_add: r.optional_int(YEAR_REMOD_ADD, YEAR_BOUNDS),
        garage_yr_blt: r.optional_int(GARAGE_YR_BLT, YEAR_BOUNDS),
        garage_cars: r.optional_int(GARAGE_CARS, IntBounds::Between(0, 5)),
        garage_area: r.optional_int(GARAGE_AREA, IntBounds::AtLeast(0)),
        total_bsmt_sf: r.optional_int(TOTAL_BSMT_SF, IntBounds::AtLeast(0)),
        mas_vnr_area: r.optional_int(MAS_VNR_AREA, IntBounds::AtLeast(0)),
        fireplaces: r.optional_int(FIREPLACES, IntBounds::Between(0, 5)),
        lot_frontage: r.optional_int(LOT_FRONTAGE, IntBounds::Positive),
        second_flr_sf: r.optional_int(SECOND_FLR_SF, IntBounds::AtLeast(0)),
        half_bath: r.optional_int(HALF_BATH, IntBounds::Between(0, 3)),
        heating_qc: r.optional_choice(HEATING_QC),
        electrical: r.optional_choice(ELECTRICAL),
    };

    r.finish(record)
}
