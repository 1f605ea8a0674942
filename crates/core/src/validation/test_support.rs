//! Shared fixtures for validation tests.

use serde_json::{json, Value};

use crate::house::{Foundation, HouseRecord, QualityGrade};

/// A well-formed high-quality house that passes every rule.
pub fn scenario_input() -> Value {
    json!({
        "OverallQual": 9,
        "GrLivArea": 2000,
        "1stFlrSF": 2000,
        "FullBath": 2,
        "TotRmsAbvGrd": 8,
        "YearBuilt": 2005,
        "LotArea": 8000,
        "KitchenQual": "Gd",
        "Foundation": "PConc",
        "ExterQual": "Gd",
        "Neighborhood": "NoRidge"
    })
}

/// The typed record for [`scenario_input`].
pub fn scenario_house() -> HouseRecord {
    HouseRecord {
        overall_qual: 9,
        gr_liv_area: 2000,
        first_flr_sf: 2000,
        full_bath: 2,
        tot_rms_abv_grd: 8,
        year_built: 2005,
        lot_area: 8000,
        kitchen_qual: QualityGrade::Gd,
        foundation: Foundation::PConc,
        exter_qual: QualityGrade::Gd,
        neighborhood: "NoRidge".to_string(),
        year_remod_add: None,
        garage_yr_blt: None,
        garage_cars: None,
        garage_area: None,
        total_bsmt_sf: None,
        mas_vnr_area: None,
        fireplaces: None,
        lot_frontage: None,
        second_flr_sf: None,
        half_bath: None,
        heating_qc: None,
        electrical: None,
    }
}

#[test]
fn scenario_input_parses_to_scenario_house() {
    let house = crate::validation::validate(&scenario_input()).unwrap();
    assert_eq!(house, scenario_house());
}
