//! # Gravity Load Calculator
//!
//! Dead, live, and reduced-live loads from occupancy type and plan area
//! per ASCE 7-22 Chapter 4.
//!
//! ## Live-load reduction
//!
//! R = 0.25 + 15/√(K_LL·A_T), applied only when the tributary area A_T is
//! at least 400 ft², clamped to 1.0 and floored at the occupancy-specific
//! minimum. The threshold and A_T are in ft²; the engine is US customary
//! throughout (see the `units` module docs).
//!
//! ## Example
//!
//! ```rust
//! use load_core::calculators::gravity::calculate_gravity;
//! use load_core::site::{BuildingGeometry, LoadParameters};
//! use load_core::standards::Occupancy;
//!
//! let result = calculate_gravity(
//!     &BuildingGeometry::default(),
//!     &LoadParameters::default(),
//!     Occupancy::Office,
//! ).unwrap();
//!
//! let r = result.get("live_load_reduction_factor").unwrap();
//! assert!(r >= 0.40 && r <= 1.0);
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::result::{LoadCategory, LoadResult};
use crate::site::{BuildingGeometry, LoadParameters, SiteConditions};
use crate::standards::Occupancy;

/// Tributary area below which no live-load reduction applies (ft²)
const REDUCTION_AREA_THRESHOLD_FT2: f64 = 400.0;

/// Compute dead, live, and reduced-live loads for the building.
///
/// Partitions and mechanical allowances count toward dead load at full
/// value here; the seismic calculator separately counts 25% of the
/// partition allowance toward effective seismic weight.
pub fn calculate_gravity(
    geometry: &BuildingGeometry,
    params: &LoadParameters,
    occupancy: Occupancy,
) -> CalcResult<LoadResult> {
    geometry.validate()?;
    params.validate()?;

    let area_ft2 = geometry.plan_area_ft2();
    let baseline_live_psf = occupancy.live_load_psf();

    let reduction = live_load_reduction_factor(occupancy, area_ft2)?;
    let reduced_live_psf = baseline_live_psf * reduction;

    let floor_dead_psf = params.total_floor_dead_psf();
    let wall_area_ft2 = geometry.perimeter_ft() * geometry.height_ft;
    let wall_dead_lb = params.wall_dead_psf * wall_area_ft2;

    let stories = f64::from(geometry.stories);
    // Top level carries the roof loads; remaining levels carry floor loads.
    let floor_levels = (stories - 1.0).max(0.0);
    let total_dead_lb =
        floor_dead_psf * area_ft2 * floor_levels + params.roof_dead_psf * area_ft2 + wall_dead_lb;
    let total_live_lb =
        reduced_live_psf * area_ft2 * floor_levels + params.roof_live_psf * area_ft2;

    LoadResult::new(LoadCategory::Gravity, "ASCE 7-22 Chapter 4")
        .with_label("occupancy", occupancy.display_name())
        .with_value("tributary_area_ft2", area_ft2)
        .with_value("floor_live_load_psf", baseline_live_psf)
        .with_value("live_load_reduction_factor", reduction)
        .with_value("reduced_live_load_psf", reduced_live_psf)
        .with_value("floor_dead_load_psf", floor_dead_psf)
        .with_value("roof_dead_load_psf", params.roof_dead_psf)
        .with_value("roof_live_load_psf", params.roof_live_psf)
        .with_value("wall_dead_load_kip", wall_dead_lb / 1000.0)
        .with_value("total_dead_load_kip", total_dead_lb / 1000.0)
        .with_value("total_live_load_kip", total_live_lb / 1000.0)
        .validate()
}

/// Flat-roof snow load pf = 0.7·Ce·Ct·Is·pg (ASCE 7-22 Eq. 7.3-1) with
/// Ce = Ct = 1.0 for the default exposure and thermal condition.
pub fn flat_roof_snow_psf(site: &SiteConditions) -> f64 {
    0.7 * site.risk_category.snow_importance() * site.ground_snow_psf
}

/// Live-load reduction factor for an occupancy and tributary area.
///
/// Returns 1.0 (no reduction) for non-reducible occupancies and for
/// tributary areas below the 400 ft² threshold.
pub fn live_load_reduction_factor(occupancy: Occupancy, area_ft2: f64) -> CalcResult<f64> {
    if area_ft2 <= 0.0 {
        return Err(CalcError::formula_domain(
            "tributary_area_ft2",
            area_ft2.to_string(),
            "tributary area must be positive for live-load reduction",
        ));
    }
    if !occupancy.reducible() || area_ft2 < REDUCTION_AREA_THRESHOLD_FT2 {
        return Ok(1.0);
    }

    let k_ll_at = occupancy.k_ll() * area_ft2;
    let r = 0.25 + 15.0 / k_ll_at.sqrt();
    Ok(r.min(1.0).max(occupancy.min_reduction_factor()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::BuildingGeometry;

    #[test]
    fn test_small_area_no_reduction() {
        let r = live_load_reduction_factor(Occupancy::Office, 399.0).unwrap();
        assert_eq!(r, 1.0);
    }

    #[test]
    fn test_threshold_area_reduces() {
        // At exactly 400 ft² with K_LL = 4: R = 0.25 + 15/40 = 0.625
        let r = live_load_reduction_factor(Occupancy::Office, 400.0).unwrap();
        assert!((r - 0.625).abs() < 1e-9);
    }

    #[test]
    fn test_large_area_hits_floor() {
        // Very large area drives the formula below the occupancy floor
        let r = live_load_reduction_factor(Occupancy::Office, 1_000_000.0).unwrap();
        assert_eq!(r, 0.40);
    }

    #[test]
    fn test_reduction_bounds_all_occupancies() {
        for occ in Occupancy::ALL {
            for area in [1.0, 100.0, 400.0, 2000.0, 50_000.0, 1e7] {
                let r = live_load_reduction_factor(occ, area).unwrap();
                assert!((0.40..=1.0).contains(&r), "{occ} at {area}: {r}");
            }
        }
    }

    #[test]
    fn test_nonreducible_occupancy() {
        let r = live_load_reduction_factor(Occupancy::Assembly, 10_000.0).unwrap();
        assert_eq!(r, 1.0);
        let r = live_load_reduction_factor(Occupancy::HeavyStorage, 10_000.0).unwrap();
        assert_eq!(r, 1.0);
    }

    #[test]
    fn test_nonpositive_area_is_domain_error() {
        let err = live_load_reduction_factor(Occupancy::Office, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "FORMULA_DOMAIN");
    }

    #[test]
    fn test_full_calculation() {
        let geometry = BuildingGeometry {
            length_ft: 100.0,
            width_ft: 60.0,
            height_ft: 30.0,
            stories: 2,
            story_height_ft: 15.0,
            ..BuildingGeometry::default()
        };
        let params = LoadParameters::default();
        let result = calculate_gravity(&geometry, &params, Occupancy::Office).unwrap();

        assert_eq!(result.get("tributary_area_ft2"), Some(6000.0));
        assert_eq!(result.get("floor_live_load_psf"), Some(50.0));
        // Dead = floor + partition + mech = 25 + 15 + 5 = 45 psf
        assert_eq!(result.get("floor_dead_load_psf"), Some(45.0));

        // R = 0.25 + 15/sqrt(4*6000) = 0.25 + 15/154.919 = 0.3468 -> floored at 0.40
        let r = result.get("live_load_reduction_factor").unwrap();
        assert!((r - 0.40).abs() < 1e-9);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let geometry = BuildingGeometry {
            length_ft: -10.0,
            ..BuildingGeometry::default()
        };
        let err =
            calculate_gravity(&geometry, &LoadParameters::default(), Occupancy::Office).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_flat_roof_snow() {
        use crate::site::RiskCategory;

        let site = SiteConditions {
            ground_snow_psf: 30.0,
            ..SiteConditions::default()
        };
        assert!((flat_roof_snow_psf(&site) - 21.0).abs() < 1e-9);

        let essential = SiteConditions {
            risk_category: RiskCategory::IV,
            ..site
        };
        assert!((flat_roof_snow_psf(&essential) - 25.2).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let geometry = BuildingGeometry::default();
        let params = LoadParameters::default();
        let a = calculate_gravity(&geometry, &params, Occupancy::Residential).unwrap();
        let b = calculate_gravity(&geometry, &params, Occupancy::Residential).unwrap();
        assert_eq!(a, b);
    }
}
