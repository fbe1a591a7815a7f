//! # Uniform Calculation Result
//!
//! Every calculator packages its output as a [`LoadResult`]: a category
//! tag, a deterministic map of named numeric sub-quantities, string labels
//! for derived metadata (zone identifiers, design category letters), and a
//! warning list.
//!
//! A `LoadResult` is either fully populated or the calculator returned an
//! error; there are no partially-filled results with silently zeroed
//! fields. Any fallback or default substitution made during the
//! calculation appears in `warnings`, and the report renderer prints those
//! prominently so a default-zone estimate cannot be mistaken for a
//! site-specific one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Hazard category a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCategory {
    /// Dead/live gravity loads
    Gravity,
    /// Wind pressures and base shear
    Wind,
    /// Seismic base shear and story forces
    Seismic,
}

impl LoadCategory {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadCategory::Gravity => "Gravity loads",
            LoadCategory::Wind => "Wind loads",
            LoadCategory::Seismic => "Seismic loads",
        }
    }
}

impl std::fmt::Display for LoadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Uniform result structure produced by every calculator.
///
/// Values are keyed by snake_case quantity names with unit suffixes
/// (e.g. `"base_shear_kip"`, `"design_spectral_sds_g"`). The maps are
/// `BTreeMap` so JSON output and rendered reports are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Hazard category
    pub category: LoadCategory,

    /// Calculation method string (e.g. "ASCE 7-22 analytical procedure")
    pub method: String,

    /// Zone identifier when a zone lookup was involved
    pub zone: Option<String>,

    /// Named numeric sub-quantities
    pub values: BTreeMap<String, f64>,

    /// Derived non-numeric metadata (e.g. seismic design category)
    pub labels: BTreeMap<String, String>,

    /// Fallbacks and defaults applied during the calculation.
    /// Never empty when a default zone or assumed value was substituted.
    pub warnings: Vec<String>,
}

impl LoadResult {
    /// Create an empty result for a category and method
    pub fn new(category: LoadCategory, method: impl Into<String>) -> Self {
        LoadResult {
            category,
            method: method.into(),
            zone: None,
            values: BTreeMap::new(),
            labels: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Set the zone identifier (builder pattern)
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Add a numeric value (builder pattern)
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Add a metadata label (builder pattern)
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Record a fallback/default warning (builder pattern)
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Add a numeric value (mutable)
    pub fn set_value(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Get a value by name
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get a value by name, erring when absent
    pub fn require(&self, key: &str) -> CalcResult<f64> {
        self.get(key)
            .ok_or_else(|| CalcError::missing_field(format!("result value '{key}'")))
    }

    /// Whether any fallback/default was applied
    pub fn used_fallback(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Validate the all-finite invariant.
    ///
    /// Calculators call this before returning so a NaN or infinity from a
    /// formula-domain slip can never escape as a plausible-looking result.
    pub fn validate(self) -> CalcResult<Self> {
        for (key, value) in &self.values {
            if !value.is_finite() {
                return Err(CalcError::formula_domain(
                    key.clone(),
                    value.to_string(),
                    "result value is not finite",
                ));
            }
        }
        Ok(self)
    }
}
