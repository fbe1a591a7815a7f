//! Load symbols, load cases, and code-prescribed combinations
//!
//! # Overview
//!
//! - [`LoadType`] - ASCE 7 load categories (D, L, Lr, S, W, E, ...)
//! - [`LoadCase`] - service-level load magnitudes for one scenario
//! - [`LoadCombination`] - named factor set for a code combination
//! - [`DesignMethod`] - strength (LRFD) vs allowable (ASD) philosophy
//!
//! # Example
//!
//! ```
//! use load_core::loads::{LoadType, LoadCase, DesignMethod, find_governing_combination};
//!
//! let loads = LoadCase::new("Roof level")
//!     .with_load(LoadType::Dead, 100.0)
//!     .with_load(LoadType::Live, 50.0);
//!
//! let combos = DesignMethod::Lrfd.combinations();
//! let (governing, name) = find_governing_combination(&loads, &combos);
//! assert_eq!(governing, 200.0); // 1.2D + 1.6L
//! assert!(name.starts_with("LRFD-2"));
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{
    asce7_asd_combinations, asce7_lrfd_combinations, evaluate_combinations,
    find_governing_combination, find_minimum_combination, CombinationType, LoadCombination,
};
pub use load_types::LoadType;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Design methodology selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DesignMethod {
    /// Load and Resistance Factor Design - factored (strength) loads
    #[default]
    Lrfd,
    /// Allowable Stress Design - service loads
    Asd,
}

impl DesignMethod {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignMethod::Lrfd => "LRFD (Load and Resistance Factor Design)",
            DesignMethod::Asd => "ASD (Allowable Stress Design)",
        }
    }

    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::Lrfd => "LRFD",
            DesignMethod::Asd => "ASD",
        }
    }

    /// The load combinations prescribed for this design method
    pub fn combinations(&self) -> Vec<LoadCombination> {
        match self {
            DesignMethod::Lrfd => asce7_lrfd_combinations(),
            DesignMethod::Asd => asce7_asd_combinations(),
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Service-level load magnitudes by type for one loading scenario.
///
/// Stored unfactored; combination factors produce design values. The map
/// is a `BTreeMap` so serialization and report output are deterministic.
///
/// # Example
/// ```
/// use load_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Typical floor")
///     .with_load(LoadType::Dead, 20.0)
///     .with_load(LoadType::Live, 50.0);
///
/// assert_eq!(case.get(LoadType::Dead), 20.0);
/// assert_eq!(case.get(LoadType::Snow), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// User-provided label for this load case
    pub label: String,

    /// Load values keyed by type (units depend on context: psf, kips, ...)
    pub loads: BTreeMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: BTreeMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Set a load value (mutable)
    pub fn set_load(&mut self, load_type: LoadType, value: f64) {
        self.loads.insert(load_type, value);
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Check if a load type is defined (even if zero)
    pub fn has(&self, load_type: LoadType) -> bool {
        self.loads.contains_key(&load_type)
    }

    /// Validate the load case: gravity loads must be non-negative and
    /// every magnitude finite.
    pub fn validate(&self) -> CalcResult<()> {
        for (load_type, value) in &self.loads {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    "Load magnitude must be finite",
                ));
            }
            if load_type.is_gravity() && *value < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} cannot be negative", load_type.description()),
                ));
            }
        }
        Ok(())
    }

    /// Total unfactored gravity load
    pub fn total_gravity(&self) -> f64 {
        LoadType::ALL
            .iter()
            .filter(|lt| lt.is_gravity())
            .map(|lt| self.get(*lt))
            .sum()
    }

    /// Apply all combinations for a design method and return the
    /// governing (maximum) value with the combination name
    pub fn governing_load(&self, method: DesignMethod) -> (f64, String) {
        find_governing_combination(self, &method.combinations())
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase::new("Unnamed")
    }
}
