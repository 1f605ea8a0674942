//! Feature vector construction for the regression pipeline.
//!
//! The pipeline was fitted on a frame with exactly [`FEATURE_COLUMNS`], in
//! that order. Absent optional attributes are passed as
//! [`FeatureValue::Missing`] so the pipeline's own imputation applies.

use serde::Serialize;

use crate::house::*;

/// Numeric columns, in frame order.
pub const NUMERIC_COLUMNS: [&str; 17] = [
    OVERALL_QUAL,
    GR_LIV_AREA,
    FIRST_FLR_SF,
    FULL_BATH,
    TOT_RMS_ABV_GRD,
    YEAR_BUILT,
    LOT_AREA,
    YEAR_REMOD_ADD,
    GARAGE_YR_BLT,
    GARAGE_CARS,
    GARAGE_AREA,
    TOTAL_BSMT_SF,
    MAS_VNR_AREA,
    FIREPLACES,
    LOT_FRONTAGE,
    SECOND_FLR_SF,
    HALF_BATH,
];

/// Categorical columns, in frame order.
pub const CATEGORICAL_COLUMNS: [&str; 6] = [
    KITCHEN_QUAL,
    FOUNDATION,
    EXTER_QUAL,
    NEIGHBORHOOD,
    HEATING_QC,
    ELECTRICAL,
];

/// All 23 columns: numerics first, then categoricals.
pub const FEATURE_COLUMNS: [&str; 23] = [
    OVERALL_QUAL,
    GR_LIV_AREA,
    FIRST_FLR_SF,
    FULL_BATH,
    TOT_RMS_ABV_GRD,
    YEAR_BUILT,
    LOT_AREA,
    YEAR_REMOD_ADD,
    GARAGE_YR_BLT,
    GARAGE_CARS,
    GARAGE_AREA,
    TOTAL_BSMT_SF,
    MAS_VNR_AREA,
    FIREPLACES,
    LOT_FRONTAGE,
    SECOND_FLR_SF,
    HALF_BATH,
    KITCHEN_QUAL,
    FOUNDATION,
    EXTER_QUAL,
    NEIGHBORHOOD,
    HEATING_QC,
    ELECTRICAL,
];

/// One cell of the feature frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
    /// Serialized as `null`.
    Missing,
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Number(v as f64)
    }
}

impl<T: Into<FeatureValue>> From<Option<T>> for FeatureValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FeatureValue::Missing, Into::into)
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Category(v.to_string())
    }
}

fn category<T: Choice>(v: Option<T>) -> FeatureValue {
    v.map(|c| c.as_str()).into()
}

/// A single-row feature frame, aligned with [`FEATURE_COLUMNS`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<FeatureValue>,
}

impl FeatureVector {
    /// Build the row for one validated house.
    pub fn from_house(house: &HouseRecord) -> Self {
        let values: Vec<FeatureValue> = vec![
            house.overall_qual.into(),
            house.gr_liv_area.into(),
            house.first_flr_sf.into(),
            house.full_bath.into(),
            house.tot_rms_abv_grd.into(),
            house.year_built.into(),
            house.lot_area.into(),
            house.year_remod_add.into(),
            house.garage_yr_blt.into(),
            house.garage_cars.into(),
            house.garage_area.into(),
            house.total_bsmt_sf.into(),
            house.mas_vnr_area.into(),
            house.fireplaces.into(),
            house.lot_frontage.into(),
            house.second_flr_sf.into(),
            house.half_bath.into(),
            house.kitchen_qual.as_str().into(),
            house.foundation.as_str().into(),
            house.exter_qual.as_str().into(),
            house.neighborhood.as_str().into(),
            category(house.heating_qc),
            category(house.electrical),
        ];
        debug_assert_eq!(values.len(), FEATURE_COLUMNS.len());
        Self { values }
    }

    /// Value of a named column, or `None` if the column is unknown.
    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.values.get(i))
    }

    /// Columns and values in frame order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FeatureVector {
    /// Serializes as a `{ column: value }` object in frame order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
