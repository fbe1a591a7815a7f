//! Material Standards Tables
//!
//! Reference physical properties for steel, concrete, and aluminum keyed by
//! their standard designations (ASTM, ACI, AA). Property values are stored
//! in SI (MPa, kg/m³) as published by those standards.
//!
//! Lookups by designation are a hard error on miss: there is no safe
//! default material, and silently substituting placeholder properties
//! produces physically wrong structural results downstream. Callers that
//! genuinely have a non-standard material construct a
//! [`MaterialFamily::Custom`] record explicitly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of material families.
///
/// Calculation-facing code matches on this tag; material kind is never
/// inferred from display names or object naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialFamily {
    /// Structural steel (ASTM designations)
    Steel,
    /// Structural concrete (ACI 318 strength classes)
    Concrete,
    /// Structural aluminum (Aluminum Association designations)
    Aluminum,
    /// Caller-supplied properties outside the standard tables
    Custom,
}

impl MaterialFamily {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialFamily::Steel => "Steel",
            MaterialFamily::Concrete => "Concrete",
            MaterialFamily::Aluminum => "Aluminum",
            MaterialFamily::Custom => "Custom",
        }
    }

    /// Plausible density range (kg/m³) for table self-checks
    pub fn density_range_kg_m3(&self) -> (f64, f64) {
        match self {
            MaterialFamily::Steel => (7700.0, 8050.0),
            MaterialFamily::Concrete => (2200.0, 2500.0),
            MaterialFamily::Aluminum => (2600.0, 2800.0),
            MaterialFamily::Custom => (0.0, f64::MAX),
        }
    }
}

impl std::fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Full fixed-shape property record for a material standard.
///
/// Every table entry supplies the complete field set for its family;
/// the repository self-check test enforces this schema.
///
/// For concrete entries, `yield_strength_mpa` stores the 0.85·f'c design
/// plateau and `ultimate_strength_mpa` the specified f'c, so the
/// ultimate > yield invariant holds uniformly across families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Standard designation key (e.g. "ASTM_A992")
    pub designation: String,

    /// Material family tag
    pub family: MaterialFamily,

    /// Yield strength Fy (MPa)
    pub yield_strength_mpa: f64,

    /// Ultimate/specified strength Fu (MPa)
    pub ultimate_strength_mpa: f64,

    /// Modulus of elasticity E (MPa)
    pub modulus_mpa: f64,

    /// Density (kg/m³)
    pub density_kg_m3: f64,

    /// Poisson's ratio
    pub poisson_ratio: f64,
}

impl MaterialProperties {
    /// Construct a caller-supplied custom material record.
    pub fn custom(
        designation: impl Into<String>,
        yield_strength_mpa: f64,
        ultimate_strength_mpa: f64,
        modulus_mpa: f64,
        density_kg_m3: f64,
        poisson_ratio: f64,
    ) -> Self {
        MaterialProperties {
            designation: designation.into(),
            family: MaterialFamily::Custom,
            yield_strength_mpa,
            ultimate_strength_mpa,
            modulus_mpa,
            density_kg_m3,
            poisson_ratio,
        }
    }
}

fn entry(
    map: &mut BTreeMap<String, MaterialProperties>,
    designation: &str,
    family: MaterialFamily,
    fy: f64,
    fu: f64,
    e: f64,
    density: f64,
    poisson: f64,
) {
    map.insert(
        designation.to_string(),
        MaterialProperties {
            designation: designation.to_string(),
            family,
            yield_strength_mpa: fy,
            ultimate_strength_mpa: fu,
            modulus_mpa: e,
            density_kg_m3: density,
            poisson_ratio: poisson,
        },
    );
}

/// Elastic modulus of normal-weight concrete, Ec = 4700·√f'c (MPa)
fn concrete_modulus_mpa(fc_mpa: f64) -> f64 {
    4700.0 * fc_mpa.sqrt()
}

/// Build the built-in material standards table.
pub fn builtin_materials() -> BTreeMap<String, MaterialProperties> {
    let mut m = BTreeMap::new();

    // Structural steel (AISC/ASTM)
    entry(&mut m, "ASTM_A36", MaterialFamily::Steel, 250.0, 400.0, 200_000.0, 7850.0, 0.30);
    entry(&mut m, "ASTM_A572_GR50", MaterialFamily::Steel, 345.0, 450.0, 200_000.0, 7850.0, 0.30);
    entry(&mut m, "ASTM_A992", MaterialFamily::Steel, 345.0, 450.0, 200_000.0, 7850.0, 0.30);
    entry(&mut m, "ASTM_A500_GRB", MaterialFamily::Steel, 315.0, 400.0, 200_000.0, 7850.0, 0.30);
    entry(&mut m, "ASTM_A53_GRB", MaterialFamily::Steel, 240.0, 415.0, 200_000.0, 7850.0, 0.30);

    // Normal-weight concrete strength classes (ACI 318)
    for fc in [25.0, 28.0, 30.0, 35.0, 40.0] {
        let designation = format!("ACI_318_FC{:.0}", fc);
        entry(
            &mut m,
            &designation,
            MaterialFamily::Concrete,
            0.85 * fc,
            fc,
            concrete_modulus_mpa(fc),
            2400.0,
            0.20,
        );
    }

    // Structural aluminum (Aluminum Association)
    entry(&mut m, "AA_6061_T6", MaterialFamily::Aluminum, 240.0, 290.0, 68_900.0, 2700.0, 0.33);
    entry(&mut m, "AA_6063_T5", MaterialFamily::Aluminum, 110.0, 152.0, 68_900.0, 2700.0, 0.33);

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_schema_complete() {
        // Every entry carries the full field set with physical values,
        // and ultimate strength strictly exceeds yield.
        for (key, props) in builtin_materials() {
            assert_eq!(key, props.designation);
            assert!(props.modulus_mpa > 0.0, "{key}: modulus");
            assert!(props.density_kg_m3 > 0.0, "{key}: density");
            assert!(props.poisson_ratio > 0.0, "{key}: poisson");
            assert!(
                props.ultimate_strength_mpa > props.yield_strength_mpa,
                "{key}: ultimate must exceed yield"
            );
        }
    }

    #[test]
    fn test_density_matches_family() {
        // Catches cross-family data entry errors, e.g. a concrete class
        // accidentally carrying steel's 7850 kg/m³.
        for (key, props) in builtin_materials() {
            let (lo, hi) = props.family.density_range_kg_m3();
            assert!(
                props.density_kg_m3 >= lo && props.density_kg_m3 <= hi,
                "{key}: density {} outside {:?} range",
                props.density_kg_m3,
                props.family
            );
        }
    }

    #[test]
    fn test_a992_values() {
        let table = builtin_materials();
        let a992 = table.get("ASTM_A992").unwrap();
        assert_eq!(a992.family, MaterialFamily::Steel);
        assert_eq!(a992.yield_strength_mpa, 345.0);
        assert_eq!(a992.modulus_mpa, 200_000.0);
    }

    #[test]
    fn test_concrete_modulus_tracks_strength() {
        let table = builtin_materials();
        let fc25 = table.get("ACI_318_FC25").unwrap();
        let fc40 = table.get("ACI_318_FC40").unwrap();
        assert!(fc40.modulus_mpa > fc25.modulus_mpa);
        assert_eq!(fc25.density_kg_m3, 2400.0);
    }

    #[test]
    fn test_custom_material() {
        let props = MaterialProperties::custom("FRP_PANEL", 80.0, 120.0, 30_000.0, 1800.0, 0.28);
        assert_eq!(props.family, MaterialFamily::Custom);

        let json = serde_json::to_string(&props).unwrap();
        let parsed: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, parsed);
    }
}
