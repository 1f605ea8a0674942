//! House attribute types and wire field names.
//!
//! [`HouseRecord`] is the validated description of one house. It is only
//! produced by [`crate::validation::pipeline::validate`], which guarantees
//! every field constraint and every cross-field rule holds.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Wire field names
// ---------------------------------------------------------------------------

pub const OVERALL_QUAL: &str = "OverallQual";
pub const GR_LIV_AREA: &str = "GrLivArea";
pub const FIRST_FLR_SF: &str = "1stFlrSF";
pub const FULL_BATH: &str = "FullBath";
pub const TOT_RMS_ABV_GRD: &str = "TotRmsAbvGrd";
pub const YEAR_BUILT: &str = "YearBuilt";
pub const LOT_AREA: &str = "LotArea";
pub const KITCHEN_QUAL: &str = "KitchenQual";
pub const FOUNDATION: &str = "Foundation";
pub const EXTER_QUAL: &str = "ExterQual";
pub const NEIGHBORHOOD: &str = "Neighborhood";

pub const YEAR_REMOD_ADD: &str = "YearRemodAdd";
pub const GARAGE_YR_BLT: &str = "GarageYrBlt";
pub const GARAGE_CARS: &str = "GarageCars";
pub const GARAGE_AREA: &str = "GarageArea";
pub const TOTAL_BSMT_SF: &str = "TotalBsmtSF";
pub const MAS_VNR_AREA: &str = "MasVnrArea";
pub const FIREPLACES: &str = "Fireplaces";
pub const LOT_FRONTAGE: &str = "LotFrontage";
pub const SECOND_FLR_SF: &str = "2ndFlrSF";
pub const HALF_BATH: &str = "HalfBath";
pub const HEATING_QC: &str = "HeatingQC";
pub const ELECTRICAL: &str = "Electrical";

// ---------------------------------------------------------------------------
// Enumerated attributes
// ---------------------------------------------------------------------------

/// A closed set of string literals accepted for an enumerated field.
///
/// Matching is exact and case-sensitive.
pub trait Choice: Sized + Copy + Default {
    /// Every accepted literal, in display order.
    const VARIANTS: &'static [&'static str];

    fn parse(value: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;
}

/// Five-step quality scale shared by kitchen, exterior, and heating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum QualityGrade {
    Ex,
    Gd,
    #[default]
    TA,
    Fa,
    Po,
}

impl QualityGrade {
    /// Fair or poor.
    pub fn is_poor(self) -> bool {
        matches!(self, QualityGrade::Fa | QualityGrade::Po)
    }

    pub fn is_excellent(self) -> bool {
        self == QualityGrade::Ex
    }
}

impl Choice for QualityGrade {
    const VARIANTS: &'static [&'static str] = &["Ex", "Gd", "TA", "Fa", "Po"];

    fn parse(value: &str) -> Option<Self> {
        match value {
            "Ex" => Some(Self::Ex),
            "Gd" => Some(Self::Gd),
            "TA" => Some(Self::TA),
            "Fa" => Some(Self::Fa),
            "Po" => Some(Self::Po),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ex => "Ex",
            Self::Gd => "Gd",
            Self::TA => "TA",
            Self::Fa => "Fa",
            Self::Po => "Po",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Foundation {
    #[default]
    PConc,
    CBlock,
    BrkTil,
    Slab,
    Stone,
    Wood,
}

impl Choice for Foundation {
    const VARIANTS: &'static [&'static str] = &["PConc", "CBlock", "BrkTil", "Slab", "Stone", "Wood"];

    fn parse(value: &str) -> Option<Self> {
        match value {
            "PConc" => Some(Self::PConc),
            "CBlock" => Some(Self::CBlock),
            "BrkTil" => Some(Self::BrkTil),
            "Slab" => Some(Self::Slab),
            "Stone" => Some(Self::Stone),
            "Wood" => Some(Self::Wood),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::PConc => "PConc",
            Self::CBlock => "CBlock",
            Self::BrkTil => "BrkTil",
            Self::Slab => "Slab",
            Self::Stone => "Stone",
            Self::Wood => "Wood",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ElectricalSystem {
    #[default]
    SBrkr,
    FuseA,
    FuseF,
    FuseP,
    Mix,
}

impl ElectricalSystem {
    /// Fair or poor fuse panels. `FuseA` (average) is not counted.
    pub fn is_outdated_fuse(self) -> bool {
        matches!(self, ElectricalSystem::FuseF | ElectricalSystem::FuseP)
    }
}

impl Choice for ElectricalSystem {
    const VARIANTS: &'static [&'static str] = &["SBrkr", "FuseA", "FuseF", "FuseP", "Mix"];

    fn parse(value: &str) -> Option<Self> {
        match value {
            "SBrkr" => Some(Self::SBrkr),
            "FuseA" => Some(Self::FuseA),
            "FuseF" => Some(Self::FuseF),
            "FuseP" => Some(Self::FuseP),
            "Mix" => Some(Self::Mix),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::SBrkr => "SBrkr",
            Self::FuseA => "FuseA",
            Self::FuseF => "FuseF",
            Self::FuseP => "FuseP",
            Self::Mix => "Mix",
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One house, with every field individually valid.
///
/// Optional attributes stay `None` when the caller omitted them; a garage
/// area of `Some(0)` is a different statement from an absent garage area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRecord {
    #[serde(rename = "OverallQual")]
    pub overall_qual: i64,
    #[serde(rename = "GrLivArea")]
    pub gr_liv_area: i64,
    #[serde(rename = "1stFlrSF")]
    pub first_flr_sf: i64,
    #[serde(rename = "FullBath")]
    pub full_bath: i64,
    #[serde(rename = "TotRmsAbvGrd")]
    pub tot_rms_abv_grd: i64,
    #[serde(rename = "YearBuilt")]
    pub year_built: i64,
    #[serde(rename = "LotArea")]
    pub lot_area: i64,
    #[serde(rename = "KitchenQual")]
    pub kitchen_qual: QualityGrade,
    #[serde(rename = "Foundation")]
    pub foundation: Foundation,
    #[serde(rename = "ExterQual")]
    pub exter_qual: QualityGrade,
    #[serde(rename = "Neighborhood")]
    pub neighborhood: String,

    #[serde(rename = "YearRemodAdd")]
    pub year_remod_add: Option<i64>,
    #[serde(rename = "GarageYrBlt")]
    pub garage_yr_blt: Option<i64>,
    #[serde(rename = "GarageCars")]
    pub garage_cars: Option<i64>,
    #[serde(rename = "GarageArea")]
    pub garage_area: Option<i64>,
    #[serde(rename = "TotalBsmtSF")]
    pub total_bsmt_sf: Option<i64>,
    #[serde(rename = "MasVnrArea")]
    pub mas_vnr_area: Option<i64>,
    #[serde(rename = "Fireplaces")]
    pub fireplaces: Option<i64>,
    #[serde(rename = "LotFrontage")]
    pub lot_frontage: Option<i64>,
    #[serde(rename = "2ndFlrSF")]
    pub second_flr_sf: Option<i64>,
    #[serde(rename = "HalfBath")]
    pub half_bath: Option<i64>,
    #[serde(rename = "HeatingQC")]
    pub heating_qc: Option<QualityGrade>,
    #[serde(rename = "Electrical")]
    pub electrical: Option<ElectricalSystem>,
}
