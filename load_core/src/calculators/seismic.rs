//! # Seismic Load Calculator
//!
//! Equivalent-lateral-force base shear and vertical story distribution
//! per ASCE 7-22 Chapters 11-12, with a Thai DPT 1301/1302-61 variant
//! that resolves mapped accelerations from a province table and carries
//! its own response modification factors and a long-period spectrum
//! branch.
//!
//! The flow: site-modify Ss/S1 through the Fa/Fv coefficient tables,
//! derive design values Sds/Sd1, estimate the approximate fundamental
//! period from the lateral system, evaluate the response coefficient Cs
//! on the design spectrum with code clamps, and distribute
//! `V = Cs · W` over the stories in proportion to weight times height.
//!
//! ## Example
//!
//! ```rust
//! use load_core::calculators::seismic::{calculate_seismic, SeismicCode};
//! use load_core::site::{BuildingGeometry, LoadParameters, SiteConditions};
//! use load_core::standards::StandardsRepository;
//!
//! let repo = StandardsRepository::builtin();
//! let site = SiteConditions { ss_g: 0.55, s1_g: 0.2, ..SiteConditions::default() };
//! let result = calculate_seismic(
//!     repo,
//!     &SeismicCode::Asce7,
//!     &site,
//!     &BuildingGeometry::default(),
//!     &LoadParameters::default(),
//! ).unwrap();
//!
//! assert!(result.get("base_shear_kip").unwrap() > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::result::{LoadCategory, LoadResult};
use crate::site::{BuildingGeometry, LateralSystem, LoadParameters, SiteClass, SiteConditions};
use crate::standards::StandardsRepository;

/// Long-period transition for the Thai 1/T² spectrum branch (s)
const THAI_LONG_PERIOD_TL_S: f64 = 4.0;

/// Fraction of the partition allowance included in effective seismic
/// weight (ASCE 7-22 Section 12.7.2)
const PARTITION_WEIGHT_FRACTION: f64 = 0.25;

/// Absolute floor on the response coefficient Cs
const CS_ABSOLUTE_MIN: f64 = 0.01;

/// Code variant selection for the seismic calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeismicCode {
    /// ASCE 7-22, mapped Ss/S1 from `SiteConditions`
    Asce7,
    /// DPT 1301/1302-61, mapped Ss/S1 from the province zone table
    ThaiDpt {
        /// Province name, matched case-insensitively
        province: String,
    },
}

/// Compute equivalent-lateral-force base shear and story forces.
pub fn calculate_seismic(
    repo: &StandardsRepository,
    code: &SeismicCode,
    site: &SiteConditions,
    geometry: &BuildingGeometry,
    params: &LoadParameters,
) -> CalcResult<LoadResult> {
    site.validate()?;
    geometry.validate()?;
    params.validate()?;

    if site.site_class.requires_site_specific() {
        return Err(CalcError::invalid_input(
            "site_class",
            site.site_class.to_string(),
            "Site Class F requires a site-specific ground motion study; \
             the tabulated Fa/Fv coefficients do not apply",
        ));
    }

    let mut zone_label: Option<String> = None;
    let mut warnings: Vec<String> = Vec::new();

    let (ss, s1, method) = match code {
        SeismicCode::Asce7 => (site.ss_g, site.s1_g, "ASCE 7-22 equivalent lateral force"),
        SeismicCode::ThaiDpt { province } => {
            let lookup = repo.get_seismic_zone(province)?;
            if lookup.used_default {
                warnings.push(format!(
                    "Province '{}' not in the DPT 1301/1302-61 seismic zone table; \
                     default {} zone (Ss = {} g, S1 = {} g) used",
                    province.trim(),
                    lookup.record.zone,
                    lookup.record.ss_g,
                    lookup.record.s1_g
                ));
            }
            zone_label = Some(lookup.record.zone.clone());
            (
                lookup.record.ss_g,
                lookup.record.s1_g,
                "DPT 1301/1302-61 equivalent lateral force",
            )
        }
    };

    let fa = site_coefficient_fa(site.site_class, ss);
    let fv = site_coefficient_fv(site.site_class, s1);
    let sds = 2.0 / 3.0 * fa * ss;
    let sd1 = 2.0 / 3.0 * fv * s1;

    let system = geometry.lateral_system;
    let period_s = system.period_ct() * geometry.height_ft.powf(system.period_x());
    let r = match code {
        SeismicCode::Asce7 => response_modification_us(system),
        SeismicCode::ThaiDpt { .. } => response_modification_thai(system),
    };
    let ie = site.risk_category.seismic_importance();
    let thai_long_period = matches!(code, SeismicCode::ThaiDpt { .. });
    let cs = response_coefficient(sds, sd1, period_s, r, ie, thai_long_period)?;

    let weight = effective_seismic_weight_kip(geometry, params);
    let base_shear_kip = cs * weight;

    let sdc = seismic_design_category(sds, sd1, s1);

    let mut result = LoadResult::new(LoadCategory::Seismic, method)
        .with_label("seismic_design_category", sdc)
        .with_label("lateral_system", system.display_name())
        .with_label("site_class", site.site_class.to_string())
        .with_value("ss_g", ss)
        .with_value("s1_g", s1)
        .with_value("fa", fa)
        .with_value("fv", fv)
        .with_value("sds_g", sds)
        .with_value("sd1_g", sd1)
        .with_value("approximate_period_s", period_s)
        .with_value("response_modification_r", r)
        .with_value("importance_factor", ie)
        .with_value("cs", cs)
        .with_value("effective_weight_kip", weight)
        .with_value("base_shear_kip", base_shear_kip);

    for (level, force) in distribute_story_forces(geometry, params, base_shear_kip) {
        result.set_value(format!("story_force_{level}_kip"), force);
    }

    if let Some(zone) = zone_label {
        result = result.with_zone(zone);
    }
    for warning in warnings {
        result = result.with_warning(warning);
    }
    result.validate()
}

/// Linear interpolation of a coefficient table, clamped at the ends.
fn interpolate(breakpoints: &[f64], values: &[f64], x: f64) -> f64 {
    if x <= breakpoints[0] {
        return values[0];
    }
    let last = breakpoints.len() - 1;
    if x >= breakpoints[last] {
        return values[last];
    }
    for i in 1..breakpoints.len() {
        if x <= breakpoints[i] {
            let t = (x - breakpoints[i - 1]) / (breakpoints[i] - breakpoints[i - 1]);
            return values[i - 1] + t * (values[i] - values[i - 1]);
        }
    }
    values[last]
}

const SS_BREAKPOINTS: [f64; 5] = [0.25, 0.50, 0.75, 1.00, 1.25];
const S1_BREAKPOINTS: [f64; 5] = [0.10, 0.20, 0.30, 0.40, 0.50];

/// Short-period site coefficient Fa (ASCE 7-22 Table 11.4-1).
///
/// Site Class F has no tabulated values; callers reject it before
/// reaching this table.
pub fn site_coefficient_fa(site_class: SiteClass, ss: f64) -> f64 {
    let values: [f64; 5] = match site_class {
        SiteClass::A => [0.8, 0.8, 0.8, 0.8, 0.8],
        SiteClass::B => [0.9, 0.9, 0.9, 0.9, 0.9],
        SiteClass::C => [1.3, 1.3, 1.2, 1.2, 1.2],
        SiteClass::D | SiteClass::F => [1.6, 1.4, 1.2, 1.1, 1.0],
        SiteClass::E => [2.4, 1.7, 1.3, 1.1, 0.9],
    };
    interpolate(&SS_BREAKPOINTS, &values, ss)
}

/// Long-period site coefficient Fv (ASCE 7-22 Table 11.4-2).
pub fn site_coefficient_fv(site_class: SiteClass, s1: f64) -> f64 {
    let values: [f64; 5] = match site_class {
        SiteClass::A => [0.8, 0.8, 0.8, 0.8, 0.8],
        SiteClass::B => [0.8, 0.8, 0.8, 0.8, 0.8],
        SiteClass::C => [1.5, 1.5, 1.5, 1.5, 1.4],
        SiteClass::D | SiteClass::F => [2.4, 2.2, 2.0, 1.9, 1.8],
        SiteClass::E => [4.2, 3.3, 2.8, 2.4, 2.2],
    };
    interpolate(&S1_BREAKPOINTS, &values, s1)
}

/// Response modification factor R (ASCE 7-22 Table 12.2-1, typical
/// values for the common system of each family)
pub fn response_modification_us(system: LateralSystem) -> f64 {
    match system {
        LateralSystem::MomentFrame => 8.0,
        LateralSystem::BracedFrame => 6.0,
        LateralSystem::ShearWall => 5.0,
        LateralSystem::Dual => 7.0,
    }
}

/// Response modification factor R per DPT 1301/1302-61
pub fn response_modification_thai(system: LateralSystem) -> f64 {
    match system {
        LateralSystem::MomentFrame => 5.0,
        LateralSystem::BracedFrame => 4.0,
        LateralSystem::ShearWall => 4.0,
        LateralSystem::Dual => 5.0,
    }
}

/// Seismic response coefficient Cs on the design spectrum.
///
/// Plateau `Sds/(R/Ie)` capped by the constant-velocity branch
/// `Sd1/(T·R/Ie)`; the Thai variant adds the long-period `1/T²` branch
/// beyond TL = 4.0 s. Floored at `max(0.044·Sds·Ie, 0.01)`.
pub fn response_coefficient(
    sds: f64,
    sd1: f64,
    period_s: f64,
    r: f64,
    ie: f64,
    thai_long_period: bool,
) -> CalcResult<f64> {
    if period_s <= 0.0 {
        return Err(CalcError::formula_domain(
            "approximate_period_s",
            period_s.to_string(),
            "fundamental period must be positive",
        ));
    }
    if r <= 0.0 {
        return Err(CalcError::formula_domain(
            "response_modification_r",
            r.to_string(),
            "response modification factor must be positive",
        ));
    }

    let r_over_ie = r / ie;
    let plateau = sds / r_over_ie;
    let cap = if thai_long_period && period_s > THAI_LONG_PERIOD_TL_S {
        sd1 * THAI_LONG_PERIOD_TL_S / (period_s * period_s * r_over_ie)
    } else {
        sd1 / (period_s * r_over_ie)
    };
    let floor = (0.044 * sds * ie).max(CS_ABSOLUTE_MIN);
    Ok(plateau.min(cap).max(floor))
}

/// Seismic design category: the more severe of the Sds and Sd1 table
/// lookups, with S1 ≥ 0.75 g escalating straight to E.
pub fn seismic_design_category(sds: f64, sd1: f64, s1: f64) -> &'static str {
    if s1 >= 0.75 {
        return "E";
    }
    let from_sds = if sds < 0.167 {
        0
    } else if sds < 0.33 {
        1
    } else if sds < 0.50 {
        2
    } else {
        3
    };
    let from_sd1 = if sd1 < 0.067 {
        0
    } else if sd1 < 0.133 {
        1
    } else if sd1 < 0.20 {
        2
    } else {
        3
    };
    ["A", "B", "C", "D"][from_sds.max(from_sd1)]
}

/// Effective seismic weight W (kips): dead load with the partition
/// allowance at 25%, plus the structural-system weight allowance.
pub fn effective_seismic_weight_kip(geometry: &BuildingGeometry, params: &LoadParameters) -> f64 {
    let area = geometry.plan_area_ft2();
    let floor_levels = f64::from(geometry.stories.saturating_sub(1));
    let floor_psf = params.floor_dead_psf
        + params.mechanical_psf
        + PARTITION_WEIGHT_FRACTION * params.partition_psf
        + geometry.lateral_system.weight_allowance_psf();
    let roof_psf = params.roof_dead_psf + geometry.lateral_system.weight_allowance_psf();
    let wall_lb = params.wall_dead_psf * geometry.perimeter_ft() * geometry.height_ft;

    (floor_psf * area * floor_levels + roof_psf * area + wall_lb) / 1000.0
}

/// Distribute base shear over stories proportional to story weight times
/// height. Returns (level, force in kips) pairs, level 1 at the bottom.
fn distribute_story_forces(
    geometry: &BuildingGeometry,
    params: &LoadParameters,
    base_shear_kip: f64,
) -> Vec<(u32, f64)> {
    let area = geometry.plan_area_ft2();
    let floor_weight = (params.floor_dead_psf
        + params.mechanical_psf
        + PARTITION_WEIGHT_FRACTION * params.partition_psf
        + geometry.lateral_system.weight_allowance_psf())
        * area;
    let roof_weight =
        (params.roof_dead_psf + geometry.lateral_system.weight_allowance_psf()) * area;

    let heights = geometry.level_heights_ft();
    let weight_at = |level: usize| -> f64 {
        if level + 1 == heights.len() {
            roof_weight
        } else {
            floor_weight
        }
    };

    let total_wh: f64 = heights
        .iter()
        .enumerate()
        .map(|(i, h)| weight_at(i) * h)
        .sum();
    if total_wh <= 0.0 {
        return heights.iter().enumerate().map(|(i, _)| (i as u32 + 1, 0.0)).collect();
    }

    heights
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let share = weight_at(i) * h / total_wh;
            (i as u32 + 1, base_shear_kip * share)
        })
        .collect()
}
