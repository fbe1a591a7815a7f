//! Occupancy Live Load Table
//!
//! Minimum uniformly distributed live loads by occupancy category per
//! ASCE 7-22 Table 4.3-1, together with the live-load element factor K_LL
//! and the reduction floor used by the gravity calculator.

use serde::{Deserialize, Serialize};

/// Occupancy category for live load determination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Occupancy {
    /// Private dwellings, apartments, hotels
    Residential,
    /// Offices (default)
    #[default]
    Office,
    /// School classrooms
    Classroom,
    /// Retail, first-floor mercantile
    Retail,
    /// Assembly areas, fixed or movable seating
    Assembly,
    /// Light storage warehouses
    LightStorage,
    /// Heavy storage warehouses
    HeavyStorage,
    /// Parking garages (passenger vehicles)
    Parking,
}

impl Occupancy {
    /// All occupancy categories
    pub const ALL: [Occupancy; 8] = [
        Occupancy::Residential,
        Occupancy::Office,
        Occupancy::Classroom,
        Occupancy::Retail,
        Occupancy::Assembly,
        Occupancy::LightStorage,
        Occupancy::HeavyStorage,
        Occupancy::Parking,
    ];

    /// Baseline unreduced live load (psf) per ASCE 7-22 Table 4.3-1
    pub fn live_load_psf(&self) -> f64 {
        match self {
            Occupancy::Residential => 40.0,
            Occupancy::Office => 50.0,
            Occupancy::Classroom => 40.0,
            Occupancy::Retail => 100.0,
            Occupancy::Assembly => 100.0,
            Occupancy::LightStorage => 125.0,
            Occupancy::HeavyStorage => 250.0,
            Occupancy::Parking => 40.0,
        }
    }

    /// Live load element factor K_LL used in the reduction formula
    pub fn k_ll(&self) -> f64 {
        match self {
            Occupancy::Parking => 2.0,
            _ => 4.0,
        }
    }

    /// Whether live-load reduction may be applied at all.
    ///
    /// Assembly areas and heavy storage are non-reducible per
    /// ASCE 7-22 Section 4.7.3/4.7.5.
    pub fn reducible(&self) -> bool {
        !matches!(self, Occupancy::Assembly | Occupancy::HeavyStorage)
    }

    /// Floor on the live-load reduction factor for this occupancy
    pub fn min_reduction_factor(&self) -> f64 {
        match self {
            Occupancy::Residential => 0.40,
            Occupancy::Office => 0.40,
            Occupancy::Classroom => 0.40,
            Occupancy::Retail => 0.50,
            Occupancy::Assembly => 0.60,
            Occupancy::LightStorage => 0.60,
            Occupancy::HeavyStorage => 0.60,
            Occupancy::Parking => 0.40,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Occupancy::Residential => "Residential",
            Occupancy::Office => "Office",
            Occupancy::Classroom => "Classroom",
            Occupancy::Retail => "Retail",
            Occupancy::Assembly => "Assembly",
            Occupancy::LightStorage => "Light storage",
            Occupancy::HeavyStorage => "Heavy storage",
            Occupancy::Parking => "Parking garage",
        }
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
