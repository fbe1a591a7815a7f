//! ASCE 7-22 Load Combinations
//!
//! Fixed, code-prescribed factor sets for strength (LRFD, Section 2.3.1)
//! and allowable stress (ASD, Section 2.4.1) design. The strength set is
//! the seven basic combinations; the ASD set includes the wind-uplift
//! (negative W) variants that govern anchor and connection design.
//!
//! Combination terms written `(Lr|S)` in the code apply a single factor to
//! whichever of roof live and snow governs. The factor maps here carry the
//! factor on both symbols; callers supply only the governing one of the
//! pair (or accept the conservative sum when both act together).
//!
//! There is no selection logic: generation always returns the complete
//! fixed list, and the governing value is a fold over the evaluated set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::LoadCase;
use crate::errors::CalcResult;

/// Design philosophy a combination belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombinationType {
    /// Strength design (LRFD) factored combination
    Strength,
    /// Allowable stress design (ASD) service combination
    Allowable,
}

impl CombinationType {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CombinationType::Strength => "Strength (LRFD)",
            CombinationType::Allowable => "Allowable (ASD)",
        }
    }
}

/// Code factor magnitudes never exceed this in either direction;
/// used only as a sanity check on constructed combinations.
const MAX_CODE_FACTOR: f64 = 2.0;

/// A named load combination with factors for each load type.
///
/// # Example
/// ```
/// use load_core::loads::{LoadCombination, CombinationType, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("LRFD-1", "1.4D", CombinationType::Strength)
///     .with_factor(LoadType::Dead, 1.4);
///
/// let case = LoadCase::new("Floor").with_load(LoadType::Dead, 100.0);
/// assert_eq!(combo.apply(&case), 140.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "LRFD-2", "ASD-5'")
    pub name: String,

    /// Human-readable equation (e.g., "1.2D + 1.6L + 0.5(Lr|S)")
    pub equation: String,

    /// Strength vs allowable tag
    pub combination_type: CombinationType,

    /// Load factors keyed by load type
    pub factors: BTreeMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(
        name: impl Into<String>,
        equation: impl Into<String>,
        combination_type: CombinationType,
    ) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            combination_type,
            factors: BTreeMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a load case, returning the factored total.
    ///
    /// Load types not in the combination contribute nothing; load types in
    /// the combination but absent from the case are treated as zero.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not present)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Sanity check: all factors within the code-plausible range.
    pub fn factors_in_code_range(&self) -> bool {
        self.factors
            .values()
            .all(|f| f.is_finite() && f.abs() <= MAX_CODE_FACTOR)
    }
}

/// Generate the seven basic ASCE 7-22 strength (LRFD) combinations
/// (Section 2.3.1).
///
/// # Example
/// ```
/// use load_core::loads::asce7_lrfd_combinations;
///
/// let combos = asce7_lrfd_combinations();
/// assert_eq!(combos.len(), 7);
/// assert_eq!(combos[0].equation, "1.4D");
/// ```
pub fn asce7_lrfd_combinations() -> Vec<LoadCombination> {
    use CombinationType::Strength;
    vec![
        LoadCombination::new("LRFD-1", "1.4D", Strength).with_factor(LoadType::Dead, 1.4),
        LoadCombination::new("LRFD-2", "1.2D + 1.6L + 0.5(Lr|S)", Strength)
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Live, 1.6)
            .with_factor(LoadType::LiveRoof, 0.5)
            .with_factor(LoadType::Snow, 0.5),
        LoadCombination::new("LRFD-3", "1.2D + 1.6(Lr|S) + (L|0.5W)", Strength)
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::LiveRoof, 1.6)
            .with_factor(LoadType::Snow, 1.6)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::Wind, 0.5),
        LoadCombination::new("LRFD-4", "1.2D + 1.0W + L + 0.5(Lr|S)", Strength)
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Wind, 1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::LiveRoof, 0.5)
            .with_factor(LoadType::Snow, 0.5),
        LoadCombination::new("LRFD-5", "1.2D + 1.0E + L + 0.2S", Strength)
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Seismic, 1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::Snow, 0.2),
        LoadCombination::new("LRFD-6", "0.9D + 1.0W", Strength)
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(LoadType::Wind, 1.0),
        LoadCombination::new("LRFD-7", "0.9D + 1.0E", Strength)
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(LoadType::Seismic, 1.0),
    ]
}

/// Generate the ASCE 7-22 allowable stress (ASD) combinations
/// (Section 2.4.1), including wind-uplift variants.
pub fn asce7_asd_combinations() -> Vec<LoadCombination> {
    use CombinationType::Allowable;
    vec![
        LoadCombination::new("ASD-1", "D", Allowable).with_factor(LoadType::Dead, 1.0),
        LoadCombination::new("ASD-2", "D + L", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 1.0),
        LoadCombination::new("ASD-3", "D + (Lr|S)", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::LiveRoof, 1.0)
            .with_factor(LoadType::Snow, 1.0),
        LoadCombination::new("ASD-4", "D + 0.75L + 0.75(Lr|S)", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::LiveRoof, 0.75)
            .with_factor(LoadType::Snow, 0.75),
        LoadCombination::new("ASD-5", "D + 0.6W", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Wind, 0.6),
        LoadCombination::new("ASD-5'", "D - 0.6W", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Wind, -0.6),
        LoadCombination::new("ASD-6", "D + 0.7E", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Seismic, 0.7),
        LoadCombination::new("ASD-7", "D + 0.75L + 0.45W + 0.75(Lr|S)", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, 0.45)
            .with_factor(LoadType::LiveRoof, 0.75)
            .with_factor(LoadType::Snow, 0.75),
        LoadCombination::new("ASD-8", "D + 0.75L + 0.525E + 0.75S", Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Seismic, 0.525)
            .with_factor(LoadType::Snow, 0.75),
        LoadCombination::new("ASD-9", "0.6D + 0.6W", Allowable)
            .with_factor(LoadType::Dead, 0.6)
            .with_factor(LoadType::Wind, 0.6),
        LoadCombination::new("ASD-9'", "0.6D - 0.6W", Allowable)
            .with_factor(LoadType::Dead, 0.6)
            .with_factor(LoadType::Wind, -0.6),
        LoadCombination::new("ASD-10", "0.6D + 0.7E", Allowable)
            .with_factor(LoadType::Dead, 0.6)
            .with_factor(LoadType::Seismic, 0.7),
    ]
}

/// Evaluate every combination against a load case, returning a
/// deterministic name → value map.
///
/// The case is validated first: non-finite magnitudes and negative
/// gravity loads are rejected here rather than flowing into the
/// factored values.
///
/// # Example
/// ```
/// use load_core::loads::{LoadCase, LoadType, asce7_lrfd_combinations, evaluate_combinations};
///
/// let case = LoadCase::new("Test").with_load(LoadType::Dead, 100.0);
/// let values = evaluate_combinations(&asce7_lrfd_combinations(), &case).unwrap();
/// assert_eq!(values["LRFD-1"], 140.0);
/// ```
pub fn evaluate_combinations(
    combinations: &[LoadCombination],
    case: &LoadCase,
) -> CalcResult<BTreeMap<String, f64>> {
    case.validate()?;
    Ok(combinations
        .iter()
        .map(|combo| (combo.name.clone(), combo.apply(case)))
        .collect())
}

/// Find the governing (maximum) combination result.
///
/// A fold over the fixed list, not a search: every combination is always
/// evaluated.
pub fn find_governing_combination(
    case: &LoadCase,
    combinations: &[LoadCombination],
) -> (f64, String) {
    combinations
        .iter()
        .map(|combo| (combo.apply(case), combo.name.clone()))
        .max_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or((0.0, String::new()))
}

/// Find the minimum combination result (critical for uplift).
pub fn find_minimum_combination(
    case: &LoadCase,
    combinations: &[LoadCombination],
) -> (f64, String) {
    combinations
        .iter()
        .map(|combo| (combo.apply(case), combo.name.clone()))
        .min_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or((0.0, String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lrfd_exactly_seven_named_combinations() {
        let combos = asce7_lrfd_combinations();
        assert_eq!(combos.len(), 7);

        let equations: Vec<&str> = combos.iter().map(|c| c.equation.as_str()).collect();
        assert_eq!(
            equations,
            vec![
                "1.4D",
                "1.2D + 1.6L + 0.5(Lr|S)",
                "1.2D + 1.6(Lr|S) + (L|0.5W)",
                "1.2D + 1.0W + L + 0.5(Lr|S)",
                "1.2D + 1.0E + L + 0.2S",
                "0.9D + 1.0W",
                "0.9D + 1.0E",
            ]
        );
        for combo in &combos {
            assert_eq!(combo.combination_type, CombinationType::Strength);
        }
    }

    #[test]
    fn test_lrfd_dead_only_factor() {
        let combos = asce7_lrfd_combinations();
        let lrfd1 = combos.iter().find(|c| c.name == "LRFD-1").unwrap();
        assert_eq!(lrfd1.get_factor(LoadType::Dead), 1.4);
        assert_eq!(lrfd1.get_factor(LoadType::Live), 0.0);
    }

    #[test]
    fn test_all_factors_in_code_range() {
        for combo in asce7_lrfd_combinations()
            .iter()
            .chain(asce7_asd_combinations().iter())
        {
            assert!(combo.factors_in_code_range(), "{}", combo.name);
        }
    }

    #[test]
    fn test_governing_value_gravity_dominates() {
        // D=100, L=50, W=30, E=0: governing = max(1.4*100, 1.2*100+1.6*50) = 200
        let case = LoadCase::new("Test")
            .with_load(LoadType::Dead, 100.0)
            .with_load(LoadType::Live, 50.0)
            .with_load(LoadType::Wind, 30.0)
            .with_load(LoadType::Seismic, 0.0);

        let (governing, _name) = find_governing_combination(&case, &asce7_lrfd_combinations());
        assert!((governing - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_returns_every_combination() {
        let case = LoadCase::new("Test").with_load(LoadType::Dead, 100.0);
        let values = evaluate_combinations(&asce7_lrfd_combinations(), &case).unwrap();
        assert_eq!(values.len(), 7);
        assert_eq!(values["LRFD-1"], 140.0);
        assert_eq!(values["LRFD-6"], 90.0);
    }

    #[test]
    fn test_evaluate_rejects_invalid_case() {
        let case = LoadCase::new("Bad").with_load(LoadType::Wind, f64::NAN);
        let err = evaluate_combinations(&asce7_lrfd_combinations(), &case).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let case = LoadCase::new("Bad").with_load(LoadType::Dead, -5.0);
        let err = evaluate_combinations(&asce7_lrfd_combinations(), &case).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_load_handling() {
        let case = LoadCase::new("Dead only").with_load(LoadType::Dead, 100.0);
        let combo = LoadCombination::new("T", "D + L", CombinationType::Allowable)
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 1.0);
        assert_eq!(combo.apply(&case), 100.0);
    }

    #[test]
    fn test_asd_wind_uplift() {
        let case = LoadCase::new("Roof")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Wind, 30.0);

        let (min_load, name) = find_minimum_combination(&case, &asce7_asd_combinations());
        // ASD-9': 0.6D - 0.6W = 6 - 18 = -12
        assert!((min_load - (-12.0)).abs() < 1e-9, "min_load = {min_load}");
        assert_eq!(name, "ASD-9'");
    }

    #[test]
    fn test_no_uplift_when_dead_dominates() {
        let case = LoadCase::new("Heavy floor")
            .with_load(LoadType::Dead, 100.0)
            .with_load(LoadType::Wind, 20.0);

        let (min_load, _) = find_minimum_combination(&case, &asce7_asd_combinations());
        assert!(min_load > 0.0);
    }

    #[test]
    fn test_combination_serialization() {
        let combo = LoadCombination::new("LRFD-1", "1.4D", CombinationType::Strength)
            .with_factor(LoadType::Dead, 1.4);
        let json = serde_json::to_string(&combo).unwrap();
        let parsed: LoadCombination = serde_json::from_str(&json).unwrap();
        assert_eq!(combo, parsed);
    }
}
