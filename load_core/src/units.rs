//! # Unit Conversions
//!
//! The engine works in US customary units throughout: feet, psf, mph, kips.
//! This matches the ASCE 7 formulas, which are published in that system.
//!
//! The Thai code tables (TIS 1311-50 wind zones, DPT 1301/1302-61 seismic
//! zones) publish their values in SI, so those tables store SI numbers and
//! convert at lookup time through the helpers here. The live-load reduction
//! threshold is 400 ft² and tributary areas are always ft²; the Thai
//! variants share that convention rather than carrying a parallel SI path.

/// Meters per second to miles per hour
pub const MPS_TO_MPH: f64 = 2.236_936;

/// Kilonewtons per square meter (kPa) to pounds per square foot
pub const KPA_TO_PSF: f64 = 20.885_4;

/// Convert a wind speed in m/s (Thai zone tables) to mph
pub fn mps_to_mph(speed_ms: f64) -> f64 {
    speed_ms * MPS_TO_MPH
}

/// Convert a pressure in psf to kPa (for SI-facing report lines)
pub fn psf_to_kpa(pressure_psf: f64) -> f64 {
    pressure_psf / KPA_TO_PSF
}
