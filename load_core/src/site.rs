//! # Site and Building Parameter Model
//!
//! Structured input describing the site hazard environment, the building
//! geometry, and the gravity load magnitudes. These are plain value structs;
//! every calculator validates them at its entry boundary and rejects
//! non-physical input rather than attempting best-effort computation.
//!
//! ## Example
//!
//! ```rust
//! use load_core::site::{SiteConditions, BuildingGeometry, ExposureCategory, SiteClass};
//!
//! let site = SiteConditions {
//!     basic_wind_speed_mph: 115.0,
//!     exposure: ExposureCategory::C,
//!     ss_g: 0.55,
//!     s1_g: 0.20,
//!     site_class: SiteClass::D,
//!     ..SiteConditions::default()
//! };
//! assert!(site.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Wind exposure category per ASCE 7-22 Section 26.7
///
/// Classifies ground surface roughness, which controls the velocity
/// pressure height profile through the power-law coefficients below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExposureCategory {
    /// Urban/suburban, wooded terrain
    B,
    /// Open terrain with scattered obstructions (default per code)
    #[default]
    C,
    /// Flat, unobstructed areas and water surfaces
    D,
}

impl ExposureCategory {
    /// All exposure categories
    pub const ALL: [ExposureCategory; 3] =
        [ExposureCategory::B, ExposureCategory::C, ExposureCategory::D];

    /// Power-law exponent alpha (ASCE 7-22 Table 26.11-1)
    pub fn alpha(&self) -> f64 {
        match self {
            ExposureCategory::B => 7.0,
            ExposureCategory::C => 9.5,
            ExposureCategory::D => 11.5,
        }
    }

    /// Gradient height zg in feet
    pub fn gradient_height_ft(&self) -> f64 {
        match self {
            ExposureCategory::B => 1200.0,
            ExposureCategory::C => 900.0,
            ExposureCategory::D => 700.0,
        }
    }

    /// Minimum height in feet at which Kz is clamped
    pub fn min_height_ft(&self) -> f64 {
        match self {
            ExposureCategory::B => 30.0,
            ExposureCategory::C => 15.0,
            ExposureCategory::D => 15.0,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ExposureCategory::B => "Urban/suburban, wooded",
            ExposureCategory::C => "Open terrain, scattered obstructions",
            ExposureCategory::D => "Flat unobstructed, water surfaces",
        }
    }
}

impl std::fmt::Display for ExposureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExposureCategory::B => write!(f, "B"),
            ExposureCategory::C => write!(f, "C"),
            ExposureCategory::D => write!(f, "D"),
        }
    }
}

/// Site soil classification per ASCE 7-22 Chapter 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SiteClass {
    /// Hard rock
    A,
    /// Rock
    B,
    /// Very dense soil and soft rock
    C,
    /// Stiff soil (default when soil properties are unknown)
    #[default]
    D,
    /// Soft clay soil
    E,
    /// Soils requiring site-specific response analysis
    F,
}

impl SiteClass {
    /// All site classes
    pub const ALL: [SiteClass; 6] = [
        SiteClass::A,
        SiteClass::B,
        SiteClass::C,
        SiteClass::D,
        SiteClass::E,
        SiteClass::F,
    ];

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SiteClass::A => "Hard rock",
            SiteClass::B => "Rock",
            SiteClass::C => "Very dense soil / soft rock",
            SiteClass::D => "Stiff soil",
            SiteClass::E => "Soft clay soil",
            SiteClass::F => "Site-specific analysis required",
        }
    }

    /// Whether this class requires a site-specific response analysis
    /// instead of the tabulated Fa/Fv coefficients
    pub fn requires_site_specific(&self) -> bool {
        matches!(self, SiteClass::F)
    }
}

impl std::fmt::Display for SiteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Risk category per ASCE 7-22 Table 1.5-1
///
/// Drives the seismic and snow importance factors. Wind importance is
/// absorbed into the mapped basic wind speed in ASCE 7-22, so the wind
/// factor is 1.0 for every category; it is kept as an explicit method
/// because the Thai wind provisions apply it as a multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskCategory {
    /// Low hazard to human life
    I,
    /// Standard occupancy
    #[default]
    II,
    /// Substantial hazard (schools, assembly)
    III,
    /// Essential facilities (hospitals, fire stations)
    IV,
}

impl RiskCategory {
    /// All risk categories
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::I,
        RiskCategory::II,
        RiskCategory::III,
        RiskCategory::IV,
    ];

    /// Seismic importance factor Ie (ASCE 7-22 Table 1.5-2)
    pub fn seismic_importance(&self) -> f64 {
        match self {
            RiskCategory::I | RiskCategory::II => 1.0,
            RiskCategory::III => 1.25,
            RiskCategory::IV => 1.5,
        }
    }

    /// Snow importance factor Is
    pub fn snow_importance(&self) -> f64 {
        match self {
            RiskCategory::I => 0.8,
            RiskCategory::II => 1.0,
            RiskCategory::III => 1.1,
            RiskCategory::IV => 1.2,
        }
    }

    /// Wind importance factor (1.0 under ASCE 7-22; applied explicitly
    /// by the Thai TIS variant)
    pub fn wind_importance(&self) -> f64 {
        match self {
            RiskCategory::I => 0.87,
            RiskCategory::II => 1.0,
            RiskCategory::III => 1.15,
            RiskCategory::IV => 1.15,
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Lateral force resisting system type
///
/// Selects the approximate-period coefficients Ct/x, the response
/// modification factor R, and the assumed structural weight allowance
/// used in the effective seismic weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LateralSystem {
    /// Moment-resisting frame
    #[default]
    MomentFrame,
    /// Braced frame
    BracedFrame,
    /// Shear wall system
    ShearWall,
    /// Dual system (frame + wall)
    Dual,
}

impl LateralSystem {
    /// All lateral system types
    pub const ALL: [LateralSystem; 4] = [
        LateralSystem::MomentFrame,
        LateralSystem::BracedFrame,
        LateralSystem::ShearWall,
        LateralSystem::Dual,
    ];

    /// Approximate period coefficient Ct (ASCE 7-22 Table 12.8-2)
    pub fn period_ct(&self) -> f64 {
        match self {
            LateralSystem::MomentFrame => 0.028,
            LateralSystem::BracedFrame => 0.030,
            LateralSystem::ShearWall => 0.020,
            LateralSystem::Dual => 0.020,
        }
    }

    /// Approximate period exponent x (ASCE 7-22 Table 12.8-2)
    pub fn period_x(&self) -> f64 {
        match self {
            LateralSystem::MomentFrame => 0.8,
            LateralSystem::BracedFrame => 0.75,
            LateralSystem::ShearWall => 0.75,
            LateralSystem::Dual => 0.75,
        }
    }

    /// Assumed structural self-weight allowance (psf of plan area)
    /// included in the effective seismic weight
    pub fn weight_allowance_psf(&self) -> f64 {
        match self {
            LateralSystem::MomentFrame => 10.0,
            LateralSystem::BracedFrame => 8.0,
            LateralSystem::ShearWall => 15.0,
            LateralSystem::Dual => 12.0,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LateralSystem::MomentFrame => "Moment frame",
            LateralSystem::BracedFrame => "Braced frame",
            LateralSystem::ShearWall => "Shear wall",
            LateralSystem::Dual => "Dual system",
        }
    }
}

impl std::fmt::Display for LateralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Roof geometry classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoofType {
    /// Flat or nearly flat roof
    #[default]
    Flat,
    /// Gable (double slope)
    Gable,
    /// Hip roof
    Hip,
    /// Single-slope shed roof
    Monoslope,
}

/// Geographic and hazard parameters for the building site.
///
/// ## JSON Example
///
/// ```json
/// {
///   "latitude_deg": 35.2,
///   "longitude_deg": -97.4,
///   "elevation_ft": 1200.0,
///   "basic_wind_speed_mph": 115.0,
///   "exposure": "C",
///   "topographic_kzt": 1.0,
///   "ss_g": 0.55,
///   "s1_g": 0.2,
///   "site_class": "D",
///   "ground_snow_psf": 20.0,
///   "risk_category": "II"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConditions {
    /// Site latitude in decimal degrees
    pub latitude_deg: f64,

    /// Site longitude in decimal degrees
    pub longitude_deg: f64,

    /// Ground elevation above sea level (ft)
    pub elevation_ft: f64,

    /// Basic (3-second gust) wind speed V (mph)
    pub basic_wind_speed_mph: f64,

    /// Wind exposure category
    pub exposure: ExposureCategory,

    /// Topographic factor Kzt (1.0 for flat terrain)
    pub topographic_kzt: f64,

    /// Mapped short-period spectral acceleration Ss (g)
    pub ss_g: f64,

    /// Mapped 1-second spectral acceleration S1 (g)
    pub s1_g: f64,

    /// Site soil classification
    pub site_class: SiteClass,

    /// Ground snow load pg (psf)
    pub ground_snow_psf: f64,

    /// Risk category (drives importance factors)
    pub risk_category: RiskCategory,
}

impl Default for SiteConditions {
    fn default() -> Self {
        SiteConditions {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            elevation_ft: 0.0,
            basic_wind_speed_mph: 115.0,
            exposure: ExposureCategory::default(),
            topographic_kzt: 1.0,
            ss_g: 0.0,
            s1_g: 0.0,
            site_class: SiteClass::default(),
            ground_snow_psf: 0.0,
            risk_category: RiskCategory::default(),
        }
    }
}

impl SiteConditions {
    /// Validate site parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.basic_wind_speed_mph <= 0.0 {
            return Err(CalcError::invalid_input(
                "basic_wind_speed_mph",
                self.basic_wind_speed_mph.to_string(),
                "Basic wind speed must be positive",
            ));
        }
        if self.ss_g < 0.0 {
            return Err(CalcError::invalid_input(
                "ss_g",
                self.ss_g.to_string(),
                "Ss cannot be negative",
            ));
        }
        if self.s1_g < 0.0 {
            return Err(CalcError::invalid_input(
                "s1_g",
                self.s1_g.to_string(),
                "S1 cannot be negative",
            ));
        }
        if self.topographic_kzt < 1.0 {
            return Err(CalcError::invalid_input(
                "topographic_kzt",
                self.topographic_kzt.to_string(),
                "Kzt cannot be less than 1.0",
            ));
        }
        if self.ground_snow_psf < 0.0 {
            return Err(CalcError::invalid_input(
                "ground_snow_psf",
                self.ground_snow_psf.to_string(),
                "Ground snow load cannot be negative",
            ));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(CalcError::invalid_input(
                "latitude_deg",
                self.latitude_deg.to_string(),
                "Latitude must be within -90 to 90 degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(CalcError::invalid_input(
                "longitude_deg",
                self.longitude_deg.to_string(),
                "Longitude must be within -180 to 180 degrees",
            ));
        }
        Ok(())
    }
}

/// Overall building geometry.
///
/// Linear dimensions are in feet. `length_ft` is taken as the along-wind
/// plan dimension and `width_ft` as the across-wind dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingGeometry {
    /// Plan length, along-wind (ft)
    pub length_ft: f64,

    /// Plan width, across-wind (ft)
    pub width_ft: f64,

    /// Mean roof height (ft)
    pub height_ft: f64,

    /// Number of stories
    pub stories: u32,

    /// Typical story height (ft)
    pub story_height_ft: f64,

    /// Lateral force resisting system
    pub lateral_system: LateralSystem,

    /// Roof geometry
    pub roof_type: RoofType,

    /// Roof slope in degrees from horizontal
    pub roof_slope_deg: f64,
}

impl Default for BuildingGeometry {
    fn default() -> Self {
        BuildingGeometry {
            length_ft: 100.0,
            width_ft: 60.0,
            height_ft: 30.0,
            stories: 2,
            story_height_ft: 15.0,
            lateral_system: LateralSystem::default(),
            roof_type: RoofType::default(),
            roof_slope_deg: 0.0,
        }
    }
}

impl BuildingGeometry {
    /// Validate geometry parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("length_ft", self.length_ft),
            ("width_ft", self.width_ft),
            ("height_ft", self.height_ft),
            ("story_height_ft", self.story_height_ft),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be positive",
                ));
            }
        }
        if self.stories < 1 {
            return Err(CalcError::invalid_input(
                "stories",
                self.stories.to_string(),
                "Story count must be at least 1",
            ));
        }
        // Every intermediate level must lie strictly below the roof, or
        // level heights and story forces become non-physical.
        if f64::from(self.stories.saturating_sub(1)) * self.story_height_ft >= self.height_ft {
            return Err(CalcError::invalid_input(
                "story_height_ft",
                self.story_height_ft.to_string(),
                "Story heights are inconsistent with the mean roof height; \
                 an intermediate level would sit at or above the roof",
            ));
        }
        if !(0.0..90.0).contains(&self.roof_slope_deg) {
            return Err(CalcError::invalid_input(
                "roof_slope_deg",
                self.roof_slope_deg.to_string(),
                "Roof slope must be within 0 to 90 degrees",
            ));
        }
        Ok(())
    }

    /// Plan area (ft²)
    pub fn plan_area_ft2(&self) -> f64 {
        self.length_ft * self.width_ft
    }

    /// Plan perimeter (ft)
    pub fn perimeter_ft(&self) -> f64 {
        2.0 * (self.length_ft + self.width_ft)
    }

    /// Height of each level above grade, level 1 first (ft)
    ///
    /// The top level is placed at the mean roof height so that story
    /// forces sum consistently with the overall height. `validate()`
    /// guarantees every intermediate level lies strictly below it.
    pub fn level_heights_ft(&self) -> Vec<f64> {
        (1..=self.stories)
            .map(|i| {
                if i == self.stories {
                    self.height_ft
                } else {
                    f64::from(i) * self.story_height_ft
                }
            })
            .collect()
    }
}

/// Gravity load magnitudes per unit area.
///
/// All magnitudes are service-level (unfactored) and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadParameters {
    /// Floor dead load, excluding partitions and mechanical (psf)
    pub floor_dead_psf: f64,

    /// Roof dead load (psf)
    pub roof_dead_psf: f64,

    /// Exterior wall dead load (psf of wall surface)
    pub wall_dead_psf: f64,

    /// Partition allowance (psf of floor area)
    pub partition_psf: f64,

    /// Mechanical/electrical/plumbing allowance (psf of floor area)
    pub mechanical_psf: f64,

    /// Roof live load Lr (psf)
    pub roof_live_psf: f64,
}

impl Default for LoadParameters {
    fn default() -> Self {
        LoadParameters {
            floor_dead_psf: 25.0,
            roof_dead_psf: 15.0,
            wall_dead_psf: 10.0,
            partition_psf: 15.0,
            mechanical_psf: 5.0,
            roof_live_psf: 20.0,
        }
    }
}

impl LoadParameters {
    /// Validate load magnitudes.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("floor_dead_psf", self.floor_dead_psf),
            ("roof_dead_psf", self.roof_dead_psf),
            ("wall_dead_psf", self.wall_dead_psf),
            ("partition_psf", self.partition_psf),
            ("mechanical_psf", self.mechanical_psf),
            ("roof_live_psf", self.roof_live_psf),
        ] {
            if value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Load magnitude cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Total floor dead load including partition and mechanical
    /// allowances (psf)
    pub fn total_floor_dead_psf(&self) -> f64 {
        self.floor_dead_psf + self.partition_psf + self.mechanical_psf
    }
}
