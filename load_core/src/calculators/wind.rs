//! # Wind Load Calculator
//!
//! Design wind pressures and base shear per ASCE 7-22 Chapters 26-28,
//! with a Thai TIS 1311-50 variant that resolves the basic wind speed
//! from a province table.
//!
//! Method selection is a pure function of mean roof height: buildings at
//! or below 60 ft use the low-rise envelope procedure (single velocity
//! pressure at roof height), taller buildings use the analytical
//! procedure (pressure profile integrated over height bands). The 60 ft
//! boundary is inclusive to the envelope method.
//!
//! ## Example
//!
//! ```rust
//! use load_core::calculators::wind::{calculate_wind, WindCode};
//! use load_core::site::{BuildingGeometry, SiteConditions};
//! use load_core::standards::StandardsRepository;
//!
//! let repo = StandardsRepository::builtin();
//! let result = calculate_wind(
//!     repo,
//!     &WindCode::Asce7,
//!     &SiteConditions::default(),
//!     &BuildingGeometry::default(),
//! ).unwrap();
//!
//! assert!(result.get("base_shear_kip").unwrap() > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::result::{LoadCategory, LoadResult};
use crate::site::{BuildingGeometry, ExposureCategory, SiteConditions};
use crate::standards::StandardsRepository;
use crate::units::{mps_to_mph, psf_to_kpa};

/// Wind directionality factor Kd for buildings (ASCE 7-22 Table 26.6-1)
const KD: f64 = 0.85;

/// Gust-effect factor for rigid buildings (ASCE 7-22 Section 26.11)
const GUST_FACTOR: f64 = 0.85;

/// Internal pressure coefficient magnitude for enclosed buildings
/// (ASCE 7-22 Table 26.13-1)
const GCPI: f64 = 0.18;

/// Velocity pressure constant: q = 0.00256 Kz Kzt Kd V² I (psf, mph)
const Q_CONSTANT: f64 = 0.00256;

/// Mean roof height at or below which the envelope procedure applies (ft)
const ENVELOPE_HEIGHT_LIMIT_FT: f64 = 60.0;

/// Number of height bands in the analytical pressure integration
const ANALYTICAL_BANDS: u32 = 10;

/// Windward wall external pressure coefficient
const CP_WINDWARD: f64 = 0.8;

/// Code variant selection for the wind calculation.
///
/// The Thai variant carries the province whose zone table entry supplies
/// the basic wind speed; ASCE 7 takes the speed directly from the site
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindCode {
    /// ASCE 7-22, basic wind speed from `SiteConditions`
    Asce7,
    /// TIS 1311-50, basic wind speed from the province zone table
    ThaiTis {
        /// Province name, matched case-insensitively
        province: String,
    },
}

/// Compute design wind pressures and base shear.
///
/// The procedure (envelope vs analytical) is selected from the mean roof
/// height; the tie at 60 ft goes to the envelope method.
pub fn calculate_wind(
    repo: &StandardsRepository,
    code: &WindCode,
    site: &SiteConditions,
    geometry: &BuildingGeometry,
) -> CalcResult<LoadResult> {
    site.validate()?;
    geometry.validate()?;

    let mut zone_label: Option<String> = None;
    let mut warnings: Vec<String> = Vec::new();

    // Resolve the design wind speed. ASCE 7-22 maps risk category into
    // the wind speed itself, so its importance factor is 1.0; TIS 1311-50
    // applies the importance factor explicitly.
    let (v_mph, importance, method) = match code {
        WindCode::Asce7 => (
            site.basic_wind_speed_mph,
            1.0,
            "ASCE 7-22 wind provisions",
        ),
        WindCode::ThaiTis { province } => {
            let lookup = repo.get_wind_zone(province)?;
            if lookup.used_default {
                warnings.push(format!(
                    "Province '{}' not in the TIS 1311-50 wind zone table; \
                     default {} ({} m/s) used",
                    province.trim(),
                    lookup.record.zone,
                    lookup.record.basic_wind_speed_ms
                ));
            }
            zone_label = Some(lookup.record.zone.clone());
            (
                mps_to_mph(lookup.record.basic_wind_speed_ms),
                site.risk_category.wind_importance(),
                "TIS 1311-50 wind provisions",
            )
        }
    };

    let h = geometry.height_ft;
    let kz_roof = velocity_pressure_coefficient(h, site.exposure);
    let qh_psf = velocity_pressure_psf(kz_roof, site.topographic_kzt, v_mph, importance);

    let cp_leeward = leeward_pressure_coefficient(geometry.length_ft / geometry.width_ft);
    let windward_psf = qh_psf * GUST_FACTOR * CP_WINDWARD;
    let leeward_psf = qh_psf * GUST_FACTOR * cp_leeward;
    // Internal pressure acts on both walls and cancels in the total
    // lateral force; reported for component design.
    let internal_psf = qh_psf * GCPI;
    let net_psf = windward_psf - leeward_psf;

    let (base_shear_lb, procedure) = if h <= ENVELOPE_HEIGHT_LIMIT_FT {
        (net_psf * geometry.width_ft * h, "envelope")
    } else {
        let windward_lb = integrate_windward_force(site, geometry, v_mph, importance);
        let leeward_lb = -leeward_psf * geometry.width_ft * h;
        (windward_lb + leeward_lb, "analytical")
    };

    let mut result = LoadResult::new(LoadCategory::Wind, method)
        .with_label("procedure", procedure)
        .with_label("exposure", site.exposure.to_string())
        .with_value("design_wind_speed_mph", v_mph)
        .with_value("importance_factor", importance)
        .with_value("kz_roof", kz_roof)
        .with_value("velocity_pressure_qh_psf", qh_psf)
        .with_value("windward_pressure_psf", windward_psf)
        .with_value("leeward_pressure_psf", leeward_psf)
        .with_value("internal_pressure_psf", internal_psf)
        .with_value("net_lateral_pressure_psf", net_psf)
        .with_value("base_shear_kip", base_shear_lb / 1000.0);

    // The Thai provisions publish pressures in SI; carry a kPa companion
    // value so reports can show both.
    if matches!(code, WindCode::ThaiTis { .. }) {
        result = result.with_value("velocity_pressure_qh_kpa", psf_to_kpa(qh_psf));
    }

    if let Some(zone) = zone_label {
        result = result.with_zone(zone);
    }
    for warning in warnings {
        result = result.with_warning(warning);
    }
    result.validate()
}

/// Velocity pressure exposure coefficient Kz (ASCE 7-22 Table 26.10-1).
///
/// Power law `2.01·(z/zg)^(2/α)` with the height clamped at the
/// exposure-specific minimum.
pub fn velocity_pressure_coefficient(height_ft: f64, exposure: ExposureCategory) -> f64 {
    let z = height_ft.max(exposure.min_height_ft());
    2.01 * (z / exposure.gradient_height_ft()).powf(2.0 / exposure.alpha())
}

/// Velocity pressure q in psf (ASCE 7-22 Eq. 26.10-1)
pub fn velocity_pressure_psf(kz: f64, kzt: f64, v_mph: f64, importance: f64) -> f64 {
    Q_CONSTANT * kz * kzt * KD * v_mph * v_mph * importance
}

/// Leeward wall pressure coefficient from the plan aspect ratio L/B
/// (ASCE 7-22 Figure 27.3-1), linearly interpolated between breakpoints.
fn leeward_pressure_coefficient(length_over_width: f64) -> f64 {
    if length_over_width <= 1.0 {
        -0.5
    } else if length_over_width <= 2.0 {
        -0.5 + 0.2 * (length_over_width - 1.0)
    } else if length_over_width <= 4.0 {
        -0.3 + 0.05 * (length_over_width - 2.0)
    } else {
        -0.2
    }
}

/// Windward wall force by trapezoidal integration of the pressure
/// profile over fixed height bands (lb).
fn integrate_windward_force(
    site: &SiteConditions,
    geometry: &BuildingGeometry,
    v_mph: f64,
    importance: f64,
) -> f64 {
    let band_height = geometry.height_ft / f64::from(ANALYTICAL_BANDS);
    let pressure_at = |z: f64| -> f64 {
        let kz = velocity_pressure_coefficient(z, site.exposure);
        velocity_pressure_psf(kz, site.topographic_kzt, v_mph, importance)
            * GUST_FACTOR
            * CP_WINDWARD
    };

    let mut force_lb = 0.0;
    for band in 0..ANALYTICAL_BANDS {
        let z_low = f64::from(band) * band_height;
        let z_high = z_low + band_height;
        let avg_psf = 0.5 * (pressure_at(z_low) + pressure_at(z_high));
        force_lb += avg_psf * band_height * geometry.width_ft;
    }
    force_lb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::RiskCategory;

    fn repo() -> &'static StandardsRepository {
        StandardsRepository::builtin()
    }

    #[test]
    fn test_kz_clamped_below_minimum_height() {
        let at_min = velocity_pressure_coefficient(15.0, ExposureCategory::C);
        let below = velocity_pressure_coefficient(5.0, ExposureCategory::C);
        assert_eq!(at_min, below);
    }

    #[test]
    fn test_kz_increases_with_height() {
        let low = velocity_pressure_coefficient(30.0, ExposureCategory::C);
        let high = velocity_pressure_coefficient(100.0, ExposureCategory::C);
        assert!(high > low);
    }

    #[test]
    fn test_velocity_pressure_spot_value() {
        // Exposure C at 30 ft, V = 115 mph: Kz ≈ 0.982, q ≈ 28.3 psf
        let kz = velocity_pressure_coefficient(30.0, ExposureCategory::C);
        let q = velocity_pressure_psf(kz, 1.0, 115.0, 1.0);
        assert!((kz - 0.982).abs() < 0.005, "Kz = {kz}");
        assert!((q - 28.3).abs() < 0.2, "q = {q}");
    }

    #[test]
    fn test_leeward_coefficient_interpolation() {
        assert_eq!(leeward_pressure_coefficient(0.5), -0.5);
        assert_eq!(leeward_pressure_coefficient(1.0), -0.5);
        assert!((leeward_pressure_coefficient(1.5) - (-0.4)).abs() < 1e-9);
        assert!((leeward_pressure_coefficient(2.0) - (-0.3)).abs() < 1e-9);
        assert!((leeward_pressure_coefficient(3.0) - (-0.25)).abs() < 1e-9);
        assert_eq!(leeward_pressure_coefficient(6.0), -0.2);
    }

    #[test]
    fn test_height_boundary_selects_envelope() {
        let geometry = BuildingGeometry {
            height_ft: 60.0,
            stories: 4,
            ..BuildingGeometry::default()
        };
        let result =
            calculate_wind(repo(), &WindCode::Asce7, &SiteConditions::default(), &geometry)
                .unwrap();
        assert_eq!(
            result.labels.get("procedure").map(String::as_str),
            Some("envelope")
        );

        let geometry = BuildingGeometry {
            height_ft: 60.5,
            stories: 4,
            ..geometry
        };
        let result =
            calculate_wind(repo(), &WindCode::Asce7, &SiteConditions::default(), &geometry)
                .unwrap();
        assert_eq!(
            result.labels.get("procedure").map(String::as_str),
            Some("analytical")
        );
    }

    #[test]
    fn test_base_shear_monotonic_in_wind_speed() {
        let geometry = BuildingGeometry::default();
        let mut previous = 0.0;
        for v in [90.0, 105.0, 115.0, 130.0, 150.0] {
            let site = SiteConditions {
                basic_wind_speed_mph: v,
                ..SiteConditions::default()
            };
            let result = calculate_wind(repo(), &WindCode::Asce7, &site, &geometry).unwrap();
            let shear = result.get("base_shear_kip").unwrap();
            let q = result.get("velocity_pressure_qh_psf").unwrap();
            assert!(shear > previous, "shear not increasing at V = {v}");
            assert!(q > 0.0);
            previous = shear;
        }
    }

    #[test]
    fn test_thai_known_province_zone() {
        let result = calculate_wind(
            repo(),
            &WindCode::ThaiTis {
                province: "Phuket".into(),
            },
            &SiteConditions::default(),
            &BuildingGeometry::default(),
        )
        .unwrap();
        assert_eq!(result.zone.as_deref(), Some("Zone 4"));
        assert!(result.warnings.is_empty());
        // Zone 4 is 31 m/s ≈ 69.3 mph
        let v = result.get("design_wind_speed_mph").unwrap();
        assert!((v - 69.3).abs() < 0.1, "V = {v}");
    }

    #[test]
    fn test_thai_unknown_province_flags_default() {
        let result = calculate_wind(
            repo(),
            &WindCode::ThaiTis {
                province: "NotAPlace".into(),
            },
            &SiteConditions::default(),
            &BuildingGeometry::default(),
        )
        .unwrap();
        assert_eq!(result.zone.as_deref(), Some("Zone 1"));
        assert!(result.used_fallback());
        assert!(result.warnings[0].contains("NotAPlace"));
    }

    #[test]
    fn test_thai_importance_factor_applied() {
        let essential = SiteConditions {
            risk_category: RiskCategory::IV,
            ..SiteConditions::default()
        };
        let standard = SiteConditions::default();
        let code = WindCode::ThaiTis {
            province: "Bangkok".into(),
        };
        let geometry = BuildingGeometry::default();

        let high = calculate_wind(repo(), &code, &essential, &geometry).unwrap();
        let base = calculate_wind(repo(), &code, &standard, &geometry).unwrap();
        let ratio = high.get("velocity_pressure_qh_psf").unwrap()
            / base.get("velocity_pressure_qh_psf").unwrap();
        assert!((ratio - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_site_rejected() {
        let site = SiteConditions {
            basic_wind_speed_mph: -10.0,
            ..SiteConditions::default()
        };
        let err = calculate_wind(
            repo(),
            &WindCode::Asce7,
            &site,
            &BuildingGeometry::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_idempotent() {
        let site = SiteConditions::default();
        let geometry = BuildingGeometry {
            height_ft: 120.0,
            stories: 10,
            story_height_ft: 12.0,
            ..BuildingGeometry::default()
        };
        let a = calculate_wind(repo(), &WindCode::Asce7, &site, &geometry).unwrap();
        let b = calculate_wind(repo(), &WindCode::Asce7, &site, &geometry).unwrap();
        assert_eq!(a, b);
    }
}
