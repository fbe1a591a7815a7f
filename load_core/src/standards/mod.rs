//! # Standards Repository
//!
//! Deterministic lookup from standard designators, province names, and
//! occupancy categories to fixed-shape property records.
//!
//! The repository is an explicit value constructed once and handed to
//! calculators by shared reference. It is never mutated after
//! construction, so concurrent callers need no coordination and there is
//! no import-order or monkey-patch hazard.
//!
//! Two lookup policies apply, matching the error taxonomy:
//!
//! - **Material standards** are a hard error on miss. No default material
//!   exists; zero-strength placeholders must never propagate.
//! - **Province zones** fall back to a documented conservative default
//!   zone, with the substitution surfaced through a `used_default` flag
//!   that calculators forward as a result warning.
//!
//! ## Example
//!
//! ```rust
//! use load_core::standards::StandardsRepository;
//!
//! let repo = StandardsRepository::builtin();
//! let a992 = repo.get_material("ASTM_A992").unwrap();
//! assert_eq!(a992.yield_strength_mpa, 345.0);
//!
//! let lookup = repo.get_wind_zone("NotAPlace").unwrap();
//! assert!(lookup.used_default);
//! ```

pub mod materials;
pub mod occupancy;
pub mod zones;

pub use materials::{MaterialFamily, MaterialProperties};
pub use occupancy::Occupancy;
pub use zones::{SeismicZone, WindZone, ZoneLookup};

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Code variants the engine can generate loads for.
///
/// A repository advertises the variants its tables support; calculators
/// check availability up front and fail loudly instead of returning
/// plausible-looking zeroed results for a variant with no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeVariant {
    /// US provisions: ASCE 7-22
    Asce7,
    /// Thai provisions: TIS 1311-50 wind, DPT 1301/1302-61 seismic
    ThaiTis,
}

impl CodeVariant {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeVariant::Asce7 => "ASCE 7-22",
            CodeVariant::ThaiTis => "TIS 1311-50 / DPT 1301-61",
        }
    }
}

static BUILTIN: Lazy<StandardsRepository> = Lazy::new(StandardsRepository::build_builtin);

/// Read-only collection of all standards tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsRepository {
    materials: BTreeMap<String, MaterialProperties>,
    wind_zones: BTreeMap<String, WindZone>,
    seismic_zones: BTreeMap<String, SeismicZone>,
    variants: Vec<CodeVariant>,
}

impl StandardsRepository {
    fn build_builtin() -> Self {
        StandardsRepository {
            materials: materials::builtin_materials(),
            wind_zones: zones::builtin_wind_zones(),
            seismic_zones: zones::builtin_seismic_zones(),
            variants: vec![CodeVariant::Asce7, CodeVariant::ThaiTis],
        }
    }

    /// The built-in repository with all bundled tables, constructed once.
    pub fn builtin() -> &'static StandardsRepository {
        &BUILTIN
    }

    /// A repository with only the US tables loaded.
    ///
    /// Thai variant calculations against this repository fail with
    /// `FeatureUnavailable` rather than silently using empty tables.
    pub fn us_only() -> Self {
        StandardsRepository {
            materials: materials::builtin_materials(),
            wind_zones: BTreeMap::new(),
            seismic_zones: BTreeMap::new(),
            variants: vec![CodeVariant::Asce7],
        }
    }

    /// Whether this repository supports a code variant.
    pub fn supports(&self, variant: CodeVariant) -> bool {
        self.variants.contains(&variant)
    }

    /// Require a code variant, erring when unavailable.
    pub fn require(&self, variant: CodeVariant) -> CalcResult<()> {
        if self.supports(variant) {
            Ok(())
        } else {
            Err(CalcError::feature_unavailable(
                variant.display_name(),
                "standards repository was built without this variant's tables",
            ))
        }
    }

    /// Look up a material standard by designation.
    ///
    /// A miss is a hard error; see the module docs.
    pub fn get_material(&self, designation: &str) -> CalcResult<&MaterialProperties> {
        if designation.trim().is_empty() {
            return Err(CalcError::missing_field("designation"));
        }
        self.materials
            .get(designation.trim())
            .ok_or_else(|| CalcError::material_not_found(designation.trim()))
    }

    /// All material designations, in sorted order.
    pub fn material_designations(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    /// Look up a Thai wind zone by province name.
    ///
    /// Unknown provinces fall back to the default zone with
    /// `used_default = true`.
    pub fn get_wind_zone(&self, province: &str) -> CalcResult<ZoneLookup<WindZone>> {
        self.require(CodeVariant::ThaiTis)?;
        if province.trim().is_empty() {
            return Err(CalcError::missing_field("province"));
        }
        Ok(match self.wind_zones.get(&zones::normalize_key(province)) {
            Some(record) => ZoneLookup {
                record: record.clone(),
                used_default: false,
            },
            None => ZoneLookup {
                record: zones::default_wind_zone(),
                used_default: true,
            },
        })
    }

    /// Look up a Thai seismic zone by province name.
    ///
    /// Unknown provinces fall back to the default low-hazard zone with
    /// `used_default = true`.
    pub fn get_seismic_zone(&self, province: &str) -> CalcResult<ZoneLookup<SeismicZone>> {
        self.require(CodeVariant::ThaiTis)?;
        if province.trim().is_empty() {
            return Err(CalcError::missing_field("province"));
        }
        Ok(
            match self.seismic_zones.get(&zones::normalize_key(province)) {
                Some(record) => ZoneLookup {
                    record: record.clone(),
                    used_default: false,
                },
                None => ZoneLookup {
                    record: zones::default_seismic_zone(),
                    used_default: true,
                },
            },
        )
    }
}

impl Default for StandardsRepository {
    fn default() -> Self {
        StandardsRepository::build_builtin()
    }
}
