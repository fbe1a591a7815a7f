//! # Error Types
//!
//! Structured error types for load_core. Every calculator rejects invalid
//! input at its entry boundary and never returns a partially-populated
//! result, so an `Err` here is the only failure channel.
//!
//! ## Example
//!
//! ```rust
//! use load_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_ft: f64) -> CalcResult<()> {
//!     if height_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "height_ft",
//!             height_ft.to_string(),
//!             "Building height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for load_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for load generation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-physical, out of range, wrong category)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material standard not found in the standards repository.
    ///
    /// This is always a hard error. Substituting default material
    /// properties would produce physically wrong structural results.
    #[error("Material standard not found: {designation}")]
    MaterialNotFound { designation: String },

    /// A derived quantity fell outside its valid mathematical domain
    /// (for example a non-positive argument to a square root)
    #[error("Formula domain error in {quantity}: {value} - {reason}")]
    FormulaDomain {
        quantity: String,
        value: String,
        reason: String,
    },

    /// A code variant or data set is not available in the supplied
    /// standards repository
    #[error("Feature unavailable: {feature} - {reason}")]
    FeatureUnavailable { feature: String, reason: String },

    /// Calculation failed for a reason other than bad input
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(designation: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            designation: designation.into(),
        }
    }

    /// Create a FormulaDomain error
    pub fn formula_domain(
        quantity: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FormulaDomain {
            quantity: quantity.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FeatureUnavailable error
    pub fn feature_unavailable(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FeatureUnavailable {
            feature: feature.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FormulaDomain { .. } => "FORMULA_DOMAIN",
            CalcError::FeatureUnavailable { .. } => "FEATURE_UNAVAILABLE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
