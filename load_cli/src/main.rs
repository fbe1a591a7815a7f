//! # load_cli - Load Generation Demo
//!
//! Terminal front end for the load_core engine: prompts for the basic
//! building parameters, runs the gravity, wind, and seismic calculators,
//! evaluates the LRFD combinations, and prints the rendered report plus
//! JSON output.

use std::io::{self, BufRead, Write};

use load_core::calculators::{
    calculate_gravity, calculate_seismic, calculate_wind, flat_roof_snow_psf,
};
use load_core::calculators::{SeismicCode, WindCode};
use load_core::loads::{DesignMethod, LoadCase, LoadType};
use load_core::project::Project;
use load_core::report::render_report;
use load_core::site::{BuildingGeometry, LoadParameters, SiteConditions};
use load_core::standards::{Occupancy, StandardsRepository};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Load Generation CLI - ASCE 7-22 Demo");
    println!("====================================");
    println!();

    let length_ft = prompt_f64("Plan length (ft) [100.0]: ", 100.0);
    let width_ft = prompt_f64("Plan width (ft) [60.0]: ", 60.0);
    let stories = prompt_u32("Number of stories [3]: ", 3);
    let story_height_ft = prompt_f64("Story height (ft) [13.0]: ", 13.0);
    let wind_speed_mph = prompt_f64("Basic wind speed (mph) [115.0]: ", 115.0);
    let ss_g = prompt_f64("Mapped Ss (g) [0.55]: ", 0.55);
    let s1_g = prompt_f64("Mapped S1 (g) [0.20]: ", 0.20);
    let ground_snow_psf = prompt_f64("Ground snow load (psf) [0.0]: ", 0.0);

    let geometry = BuildingGeometry {
        length_ft,
        width_ft,
        height_ft: f64::from(stories) * story_height_ft,
        stories,
        story_height_ft,
        ..BuildingGeometry::default()
    };
    let site = SiteConditions {
        basic_wind_speed_mph: wind_speed_mph,
        ss_g,
        s1_g,
        ground_snow_psf,
        ..SiteConditions::default()
    };
    let params = LoadParameters::default();
    let repo = StandardsRepository::builtin();

    println!();
    println!("Running calculators for a {stories}-story office building...");
    println!();

    let gravity = calculate_gravity(&geometry, &params, Occupancy::Office);
    let wind = calculate_wind(repo, &WindCode::Asce7, &site, &geometry);
    let seismic = calculate_seismic(repo, &SeismicCode::Asce7, &site, &geometry, &params);

    let (gravity, wind, seismic) = match (gravity, wind, seismic) {
        (Ok(g), Ok(w), Ok(s)) => (g, w, s),
        (g, w, s) => {
            for err in [g.err(), w.err(), s.err()].into_iter().flatten() {
                eprintln!("Error: {}", err);
                if let Ok(json) = serde_json::to_string_pretty(&err) {
                    eprintln!("{}", json);
                }
            }
            std::process::exit(1);
        }
    };

    // Base-level load case from the calculator outputs, in kips
    let loads = LoadCase::new("Building base")
        .with_load(LoadType::Dead, gravity.get("total_dead_load_kip").unwrap_or(0.0))
        .with_load(LoadType::Live, gravity.get("total_live_load_kip").unwrap_or(0.0))
        .with_load(LoadType::Wind, wind.get("base_shear_kip").unwrap_or(0.0))
        .with_load(LoadType::Seismic, seismic.get("base_shear_kip").unwrap_or(0.0))
        .with_load(
            LoadType::Snow,
            flat_roof_snow_psf(&site) * geometry.plan_area_ft2() / 1000.0,
        );

    let mut project = Project::new("CLI Demo", "demo-001", "load_cli");
    project.add_analysis("Gravity", gravity.clone());
    project.add_analysis("Wind", wind.clone());
    project.add_analysis("Seismic", seismic.clone());

    let combinations = DesignMethod::Lrfd.combinations();
    let report = match render_report(
        &project.meta,
        &[gravity, wind, seismic],
        &combinations,
        &loads,
    ) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", err);
            if let Ok(json) = serde_json::to_string_pretty(&err) {
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };
    println!("{report}");

    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&project) {
        println!("{}", json);
    }
}
