//! Cross-field rules: real-world correlations between house attributes.
//!
//! Every rule is a pure function over an already field-valid
//! [`HouseRecord`]. [`CROSS_FIELD_RULES`] fixes the evaluation order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::house::*;

/// Smallest accepted garage area per car, in square feet.
pub const MIN_AREA_PER_CAR: f64 = 100.0;
/// Largest accepted garage area per car, in square feet.
pub const MAX_AREA_PER_CAR: f64 = 500.0;
/// Allowed relative gap between the floor sum and the living area.
pub const FLOOR_AREA_TOLERANCE: f64 = 0.05;
/// Basement may be at most this multiple of the first floor.
pub const MAX_BASEMENT_TO_FIRST_FLOOR: f64 = 1.5;
/// Overall quality at or above which poor components are rejected.
pub const HIGH_QUALITY_FLOOR: i64 = 8;
/// Overall quality at or below which excellent components are rejected.
pub const LOW_QUALITY_CEILING: i64 = 3;
/// Construction year from which fuse panels are rejected.
pub const MODERN_ELECTRICAL_YEAR: i64 = 1990;

/// Identifies one cross-field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    RemodelYear,
    GarageYear,
    GarageConsistency,
    FloorArea,
    LotSize,
    BathroomLoad,
    BasementSize,
    QualityConsistency,
    ElectricalEra,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::RemodelYear => "remodel_year",
            RuleId::GarageYear => "garage_year",
            RuleId::GarageConsistency => "garage_consistency",
            RuleId::FloorArea => "floor_area",
            RuleId::LotSize => "lot_size",
            RuleId::BathroomLoad => "bathroom_load",
            RuleId::BasementSize => "basement_size",
            RuleId::QualityConsistency => "quality_consistency",
            RuleId::ElectricalEra => "electrical_era",
        }
    }
}

/// A failed cross-field rule, with the field values that caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule: RuleId,
    pub message: String,
    pub values: Map<String, Value>,
}

impl RuleViolation {
    fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
            values: Map::new(),
        }
    }

    fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }
}

pub type RuleResult = Result<(), RuleViolation>;

/// A single cross-field rule.
pub type Rule = fn(&HouseRecord) -> RuleResult;

/// All cross-field rules, in evaluation order.
pub const CROSS_FIELD_RULES: &[(RuleId, Rule)] = &[
    (RuleId::RemodelYear, check_remodel_year),
    (RuleId::GarageYear, check_garage_year),
    (RuleId::GarageConsistency, check_garage_consistency),
    (RuleId::FloorArea, check_floor_area),
    (RuleId::LotSize, check_lot_size),
    (RuleId::BathroomLoad, check_bathroom_load),
    (RuleId::BasementSize, check_basement_size),
    (RuleId::QualityConsistency, check_quality_consistency),
    (RuleId::ElectricalEra, check_electrical_era),
];

/// Run the rules in order, stopping at the first violation.
pub fn first_violation(house: &HouseRecord) -> RuleResult {
    CROSS_FIELD_RULES.iter().try_for_each(|(_, rule)| rule(house))
}

/// Run every rule and collect all violations, in rule order.
pub fn all_violations(house: &HouseRecord) -> Vec<RuleViolation> {
    CROSS_FIELD_RULES
        .iter()
        .filter_map(|(_, rule)| rule(house).err())
        .collect()
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// A remodel cannot predate construction.
pub fn check_remodel_year(house: &HouseRecord) -> RuleResult {
    match house.year_remod_add {
        Some(remod) if remod < house.year_built => Err(RuleViolation::new(
            RuleId::RemodelYear,
            format!(
                "YearRemodAdd ({remod}) cannot be before YearBuilt ({})",
                house.year_built
            ),
        )
        .with(YEAR_REMOD_ADD, remod)
        .with(YEAR_BUILT, house.year_built)),
        _ => Ok(()),
    }
}

/// The garage may be recorded at most one year before the house.
pub fn check_garage_year(house: &HouseRecord) -> RuleResult {
    match house.garage_yr_blt {
        Some(garage) if garage < house.year_built - 1 => Err(RuleViolation::new(
            RuleId::GarageYear,
            format!(
                "GarageYrBlt ({garage}) cannot be significantly before YearBuilt ({})",
                house.year_built
            ),
        )
        .with(GARAGE_YR_BLT, garage)
        .with(YEAR_BUILT, house.year_built)),
        _ => Ok(()),
    }
}

/// Whether an area-per-car ratio lies within the inclusive bounds.
pub fn area_per_car_in_bounds(area_per_car: f64) -> bool {
    (MIN_AREA_PER_CAR..=MAX_AREA_PER_CAR).contains(&area_per_car)
}

/// Garage area, capacity, and year must describe the same garage.
///
/// Absent area or capacity counts as zero.
pub fn check_garage_consistency(house: &HouseRecord) -> RuleResult {
    let area = house.garage_area.unwrap_or(0);
    let cars = house.garage_cars.unwrap_or(0);
    let violation = |message: String| {
        RuleViolation::new(RuleId::GarageConsistency, message)
            .with(GARAGE_AREA, house.garage_area)
            .with(GARAGE_CARS, house.garage_cars)
            .with(GARAGE_YR_BLT, house.garage_yr_blt)
    };

    if area == 0 {
        if cars > 0 {
            return Err(violation(format!(
                "Cannot have GarageCars ({cars}) without GarageArea"
            )));
        }
        if house.garage_yr_blt.is_some() {
            return Err(violation(
                "Cannot have GarageYrBlt without GarageArea".to_string(),
            ));
        }
        return Ok(());
    }

    if cars == 0 {
        return Err(violation(format!(
            "GarageArea is {area} sq ft but GarageCars is 0"
        )));
    }

    let area_per_car = area as f64 / cars as f64;
    if area_per_car_in_bounds(area_per_car) {
        return Ok(());
    }
    let message = if area_per_car < MIN_AREA_PER_CAR {
        format!("Garage too small: {area_per_car:.0} sq ft per car (minimum 100 sq ft)")
    } else {
        format!("Garage too large: {area_per_car:.0} sq ft per car (maximum 500 sq ft)")
    };
    Err(violation(message))
}

/// First plus second floor must match the living area within 5%.
pub fn check_floor_area(house: &HouseRecord) -> RuleResult {
    let first = house.first_flr_sf;
    let second = house.second_flr_sf.unwrap_or(0);
    let living = house.gr_liv_area;
    // Areas are unbounded above; widen so the sum cannot overflow.
    let total = i128::from(first) + i128::from(second);
    let tolerance = FLOOR_AREA_TOLERANCE * living as f64;

    if ((total - i128::from(living)) as f64).abs() > tolerance {
        return Err(RuleViolation::new(
            RuleId::FloorArea,
            format!(
                "Floor areas don't match: 1stFlr ({first}) + 2ndFlr ({second}) = {total} \
                 but GrLivArea is {living}"
            ),
        )
        .with(FIRST_FLR_SF, first)
        .with(SECOND_FLR_SF, house.second_flr_sf)
        .with(GR_LIV_AREA, living));
    }
    Ok(())
}

/// The lot must be strictly larger than the living area.
pub fn check_lot_size(house: &HouseRecord) -> RuleResult {
    if house.lot_area <= house.gr_liv_area {
        return Err(RuleViolation::new(
            RuleId::LotSize,
            format!(
                "LotArea ({} sq ft) must be larger than GrLivArea ({} sq ft)",
                house.lot_area, house.gr_liv_area
            ),
        )
        .with(LOT_AREA, house.lot_area)
        .with(GR_LIV_AREA, house.gr_liv_area));
    }
    Ok(())
}

/// Bathrooms (half baths count 0.5) must leave at least one other room.
///
/// Equality is rejected: the `>` check only picks the more specific message.
pub fn check_bathroom_load(house: &HouseRecord) -> RuleResult {
    let full = house.full_bath;
    let half = house.half_bath.unwrap_or(0);
    let units = full as f64 + half as f64 * 0.5;
    let rooms = house.tot_rms_abv_grd;
    let violation = |message: String| {
        RuleViolation::new(RuleId::BathroomLoad, message)
            .with(FULL_BATH, full)
            .with(HALF_BATH, house.half_bath)
            .with(TOT_RMS_ABV_GRD, rooms)
    };

    if units > rooms as f64 {
        return Err(violation(format!(
            "Too many bathrooms: {full} full + {half} half = {units:.1} units, \
             but only {rooms} total rooms"
        )));
    }
    if units >= rooms as f64 {
        return Err(violation(
            "House must have at least one non-bathroom room".to_string(),
        ));
    }
    Ok(())
}

/// A basement may be at most 1.5 times the first floor.
pub fn check_basement_size(house: &HouseRecord) -> RuleResult {
    match house.total_bsmt_sf {
        Some(basement)
            if basement > 0
                && basement as f64 > house.first_flr_sf as f64 * MAX_BASEMENT_TO_FIRST_FLOOR =>
        {
            Err(RuleViolation::new(
                RuleId::BasementSize,
                format!(
                    "Basement ({basement} sq ft) unusually large compared to first floor ({} sq ft)",
                    house.first_flr_sf
                ),
            )
            .with(TOTAL_BSMT_SF, basement)
            .with(FIRST_FLR_SF, house.first_flr_sf))
        }
        _ => Ok(()),
    }
}

/// Kitchen and exterior quality must not contradict overall quality.
pub fn check_quality_consistency(house: &HouseRecord) -> RuleResult {
    let overall = house.overall_qual;
    let kitchen = house.kitchen_qual;
    let exterior = house.exter_qual;
    let violation = |message: String| {
        RuleViolation::new(RuleId::QualityConsistency, message)
            .with(OVERALL_QUAL, overall)
            .with(KITCHEN_QUAL, kitchen.as_str())
            .with(EXTER_QUAL, exterior.as_str())
    };

    if overall >= HIGH_QUALITY_FLOOR {
        if kitchen.is_poor() {
            return Err(violation(format!(
                "Overall quality is high ({overall}/10) but kitchen quality is poor ({})",
                kitchen.as_str()
            )));
        }
        if exterior.is_poor() {
            return Err(violation(format!(
                "Overall quality is high ({overall}/10) but exterior quality is poor ({})",
                exterior.as_str()
            )));
        }
    }

    if overall <= LOW_QUALITY_CEILING {
        if kitchen.is_excellent() {
            return Err(violation(format!(
                "Overall quality is low ({overall}/10) but kitchen quality is excellent"
            )));
        }
        if exterior.is_excellent() {
            return Err(violation(format!(
                "Overall quality is low ({overall}/10) but exterior quality is excellent"
            )));
        }
    }
    Ok(())
}

/// Houses built from 1990 on must not report fuse-based electrics.
pub fn check_electrical_era(house: &HouseRecord) -> RuleResult {
    match house.electrical {
        Some(system) if house.year_built >= MODERN_ELECTRICAL_YEAR && system.is_outdated_fuse() => {
            Err(RuleViolation::new(
                RuleId::ElectricalEra,
                format!(
                    "House built in {} shouldn't have outdated fuse electrical system ({}). \
                     Modern homes typically have circuit breakers (SBrkr)",
                    house.year_built,
                    system.as_str()
                ),
            )
            .with(YEAR_BUILT, house.year_built)
            .with(ELECTRICAL, system.as_str()))
        }
        _ => Ok(()),
    }
}
