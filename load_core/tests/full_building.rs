//! End-to-end test: run all three calculators on one building, evaluate
//! the LRFD combinations, and render the report.

use load_core::calculators::{
    calculate_gravity, calculate_seismic, calculate_wind, SeismicCode, WindCode,
};
use load_core::loads::{DesignMethod, LoadCase, LoadType};
use load_core::project::Project;
use load_core::report::render_report;
use load_core::site::{BuildingGeometry, LoadParameters, SiteConditions};
use load_core::standards::{Occupancy, StandardsRepository};

fn office_building() -> (SiteConditions, BuildingGeometry, LoadParameters) {
    let site = SiteConditions {
        basic_wind_speed_mph: 115.0,
        ss_g: 0.55,
        s1_g: 0.20,
        ..SiteConditions::default()
    };
    let geometry = BuildingGeometry {
        length_ft: 120.0,
        width_ft: 80.0,
        height_ft: 39.0,
        stories: 3,
        story_height_ft: 13.0,
        ..BuildingGeometry::default()
    };
    (site, geometry, LoadParameters::default())
}

#[test]
fn full_us_building_pipeline() {
    let repo = StandardsRepository::builtin();
    let (site, geometry, params) = office_building();

    let gravity = calculate_gravity(&geometry, &params, Occupancy::Office).unwrap();
    let wind = calculate_wind(repo, &WindCode::Asce7, &site, &geometry).unwrap();
    let seismic =
        calculate_seismic(repo, &SeismicCode::Asce7, &site, &geometry, &params).unwrap();

    // 9600 ft² tributary area drives the reduction to the office floor
    assert_eq!(gravity.get("tributary_area_ft2"), Some(9600.0));
    assert_eq!(gravity.get("live_load_reduction_factor"), Some(0.40));

    // 39 ft building takes the envelope procedure
    assert_eq!(
        wind.labels.get("procedure").map(String::as_str),
        Some("envelope")
    );
    assert!(wind.get("base_shear_kip").unwrap() > 0.0);

    // Sd1 = 2/3 · 2.2 · 0.20 ≈ 0.293 puts the building in category D
    assert_eq!(
        seismic
            .labels
            .get("seismic_design_category")
            .map(String::as_str),
        Some("D")
    );
    let base_shear = seismic.get("base_shear_kip").unwrap();
    let story_sum: f64 = (1..=3)
        .map(|i| seismic.get(&format!("story_force_{i}_kip")).unwrap())
        .sum();
    assert!((story_sum - base_shear).abs() < 1e-6);

    // Nothing in the US path uses a fallback
    assert!(!gravity.used_fallback());
    assert!(!wind.used_fallback());
    assert!(!seismic.used_fallback());

    let loads = LoadCase::new("Building base")
        .with_load(LoadType::Dead, gravity.get("total_dead_load_kip").unwrap())
        .with_load(LoadType::Live, gravity.get("total_live_load_kip").unwrap())
        .with_load(LoadType::Wind, wind.get("base_shear_kip").unwrap())
        .with_load(LoadType::Seismic, base_shear);

    let project = Project::new("Integration Test", "25-100", "Test Client");
    let report = render_report(
        &project.meta,
        &[gravity, wind, seismic],
        &DesignMethod::Lrfd.combinations(),
        &loads,
    )
    .unwrap();

    assert!(report.contains("GRAVITY LOADS"));
    assert!(report.contains("WIND LOADS"));
    assert!(report.contains("SEISMIC LOADS"));
    assert!(report.contains("<< governs"));
    assert!(report.contains("All lookups resolved"));
}

#[test]
fn thai_variant_pipeline_with_fallback_notice() {
    let repo = StandardsRepository::builtin();
    let (site, geometry, params) = office_building();

    let wind = calculate_wind(
        repo,
        &WindCode::ThaiTis {
            province: "NotAPlace".into(),
        },
        &site,
        &geometry,
    )
    .unwrap();
    let seismic = calculate_seismic(
        repo,
        &SeismicCode::ThaiDpt {
            province: "Chiang Mai".into(),
        },
        &site,
        &geometry,
        &params,
    )
    .unwrap();

    assert!(wind.used_fallback());
    assert_eq!(wind.zone.as_deref(), Some("Zone 1"));
    assert!(!seismic.used_fallback());
    assert_eq!(seismic.zone.as_deref(), Some("High"));

    let loads = LoadCase::new("Building base")
        .with_load(LoadType::Wind, wind.get("base_shear_kip").unwrap())
        .with_load(LoadType::Seismic, seismic.get("base_shear_kip").unwrap());
    let project = Project::new("Integration Test", "25-101", "Test Client");
    let report = render_report(
        &project.meta,
        &[wind, seismic],
        &DesignMethod::Asd.combinations(),
        &loads,
    )
    .unwrap();

    // The default-zone substitution must be visible in the report
    assert!(report.contains("NOTICE"));
    assert!(report.contains("NotAPlace"));
}

#[test]
fn inconsistent_story_stack_rejected_at_entry() {
    let repo = StandardsRepository::builtin();
    let (site, _, params) = office_building();

    // Three 20 ft stories in a 30 ft building would put level 2 at
    // 40 ft, above the roof; the calculators must refuse the geometry
    // rather than distribute story forces to it.
    let geometry = BuildingGeometry {
        stories: 3,
        story_height_ft: 20.0,
        height_ft: 30.0,
        ..BuildingGeometry::default()
    };

    let err = geometry.validate().unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");

    let err =
        calculate_seismic(repo, &SeismicCode::Asce7, &site, &geometry, &params).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn wind_base_shear_monotonic_through_pipeline() {
    let repo = StandardsRepository::builtin();
    let (_, geometry, _) = office_building();

    let mut previous = 0.0;
    for v in [95.0, 110.0, 125.0, 140.0, 160.0, 180.0] {
        let site = SiteConditions {
            basic_wind_speed_mph: v,
            ..SiteConditions::default()
        };
        let wind = calculate_wind(repo, &WindCode::Asce7, &site, &geometry).unwrap();
        let shear = wind.get("base_shear_kip").unwrap();
        assert!(shear > previous, "base shear not increasing at V = {v}");
        previous = shear;
    }
}

#[test]
fn calculators_are_idempotent() {
    let repo = StandardsRepository::builtin();
    let (site, geometry, params) = office_building();

    for _ in 0..2 {
        let a = calculate_seismic(repo, &SeismicCode::Asce7, &site, &geometry, &params).unwrap();
        let b = calculate_seismic(repo, &SeismicCode::Asce7, &site, &geometry, &params).unwrap();
        assert_eq!(a, b);

        let a = calculate_wind(repo, &WindCode::Asce7, &site, &geometry).unwrap();
        let b = calculate_wind(repo, &WindCode::Asce7, &site, &geometry).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn results_serialize_and_roundtrip() {
    let repo = StandardsRepository::builtin();
    let (site, geometry, params) = office_building();

    let seismic =
        calculate_seismic(repo, &SeismicCode::Asce7, &site, &geometry, &params).unwrap();
    let json = serde_json::to_string_pretty(&seismic).unwrap();
    let parsed: load_core::LoadResult = serde_json::from_str(&json).unwrap();
    assert_eq!(seismic, parsed);
}
