//! # Report Rendering
//!
//! Formats project metadata, calculator results, and evaluated load
//! combinations into a deterministic plain-text report. Rendering is
//! purely presentational: string formatting plus the percentage each
//! combination carries of the governing value.
//!
//! Output is deterministic for identical inputs (value maps iterate in
//! sorted order), so reports are diffable and suitable for golden-file
//! comparison. Any result that relied on a fallback or default zone is
//! flagged with a `NOTICE` line in its section and repeated in the
//! closing notices block, so a default-zone estimate cannot pass for a
//! site-specific one.

use std::fmt::Write;

use crate::errors::CalcResult;
use crate::loads::{evaluate_combinations, LoadCase, LoadCombination};
use crate::project::ProjectMetadata;
use crate::result::LoadResult;

const RULE: &str = "================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------";

/// Render the full load report.
///
/// `results` are printed in the order given; `combinations` are
/// evaluated against `loads` and listed with the governing combination
/// marked. The load case is validated before evaluation, so a case
/// carrying non-finite or negative gravity magnitudes is rejected
/// rather than rendered.
pub fn render_report(
    meta: &ProjectMetadata,
    results: &[LoadResult],
    combinations: &[LoadCombination],
    loads: &LoadCase,
) -> CalcResult<String> {
    loads.validate()?;
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "STRUCTURAL LOAD REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Job:       {}", meta.job_id);
    let _ = writeln!(out, "Client:    {}", meta.client);
    let _ = writeln!(out, "Engineer:  {}", meta.engineer);
    let _ = writeln!(out, "Date:      {}", meta.created.format("%Y-%m-%d"));
    let _ = writeln!(out);

    for result in results {
        render_result_section(&mut out, result);
    }

    render_combination_section(&mut out, combinations, loads)?;
    render_notices(&mut out, results);

    Ok(out)
}

fn render_result_section(out: &mut String, result: &LoadResult) {
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "{}", result.category.display_name().to_uppercase());
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "Method:    {}", result.method);
    if let Some(zone) = &result.zone {
        let _ = writeln!(out, "Zone:      {zone}");
    }
    for (key, value) in &result.labels {
        let _ = writeln!(out, "{:<34} {}", display_key(key), value);
    }
    for (key, value) in &result.values {
        let _ = writeln!(out, "{:<34} {value:>12.3}", display_key(key));
    }
    for warning in &result.warnings {
        let _ = writeln!(out, "NOTICE: {warning}");
    }
    let _ = writeln!(out);
}

fn render_combination_section(
    out: &mut String,
    combinations: &[LoadCombination],
    loads: &LoadCase,
) -> CalcResult<()> {
    if combinations.is_empty() {
        return Ok(());
    }
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "LOAD COMBINATIONS ({})", loads.label);
    let _ = writeln!(out, "{THIN_RULE}");

    let evaluated = evaluate_combinations(combinations, loads)?;
    let governing = evaluated
        .values()
        .fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));

    for combo in combinations {
        let value = evaluated.get(&combo.name).copied().unwrap_or(0.0);
        let marker = if governing.is_finite() && (value - governing).abs() < 1e-9 {
            "  << governs"
        } else {
            ""
        };
        let percent = if governing.is_finite() && governing != 0.0 {
            100.0 * value / governing
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "{:<10} {:<36} {value:>12.3}  ({percent:>5.1}%){marker}",
            combo.name, combo.equation
        );
    }
    let _ = writeln!(out);
    Ok(())
}

fn render_notices(out: &mut String, results: &[LoadResult]) {
    let notices: Vec<&String> = results.iter().flat_map(|r| r.warnings.iter()).collect();
    let _ = writeln!(out, "{RULE}");
    if notices.is_empty() {
        let _ = writeln!(out, "All lookups resolved from site-specific table entries.");
    } else {
        let _ = writeln!(out, "NOTICES ({})", notices.len());
        for notice in notices {
            let _ = writeln!(out, "  - {notice}");
        }
    }
    let _ = writeln!(out, "{RULE}");
}

/// Turn a snake_case value key into a report row label.
fn display_key(key: &str) -> String {
    let mut label = key.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{asce7_lrfd_combinations, LoadType};
    use crate::project::Project;
    use crate::result::LoadCategory;

    fn sample_result(with_warning: bool) -> LoadResult {
        let result = LoadResult::new(LoadCategory::Wind, "TIS 1311-50 wind provisions")
            .with_zone("Zone 1")
            .with_value("base_shear_kip", 42.5)
            .with_value("velocity_pressure_qh_psf", 18.2);
        if with_warning {
            result.with_warning("Province 'NotAPlace' not in the wind zone table; default used")
        } else {
            result
        }
    }

    fn sample_loads() -> LoadCase {
        LoadCase::new("Base level")
            .with_load(LoadType::Dead, 100.0)
            .with_load(LoadType::Live, 50.0)
            .with_load(LoadType::Wind, 30.0)
    }

    #[test]
    fn test_report_contains_sections() {
        let project = Project::new("Jane Engineer", "25-042", "ACME");
        let report = render_report(
            &project.meta,
            &[sample_result(false)],
            &asce7_lrfd_combinations(),
            &sample_loads(),
        )
        .unwrap();

        assert!(report.contains("STRUCTURAL LOAD REPORT"));
        assert!(report.contains("25-042"));
        assert!(report.contains("WIND LOADS"));
        assert!(report.contains("Zone:      Zone 1"));
        assert!(report.contains("Base shear kip"));
        assert!(report.contains("LOAD COMBINATIONS"));
        assert!(report.contains("<< governs"));
    }

    #[test]
    fn test_governing_combination_marked() {
        let project = Project::new("E", "J", "C");
        let report = render_report(
            &project.meta,
            &[],
            &asce7_lrfd_combinations(),
            &sample_loads(),
        )
        .unwrap();
        // D=100, L=50: 1.2D + 1.6L = 200 governs
        let governing_line = report
            .lines()
            .find(|l| l.contains("<< governs"))
            .expect("no governing marker");
        assert!(governing_line.contains("LRFD-2"));
        assert!(governing_line.contains("200.000"));
        assert!(governing_line.contains("100.0%"));
    }

    #[test]
    fn test_fallback_notice_is_visible() {
        let project = Project::new("E", "J", "C");
        let report =
            render_report(&project.meta, &[sample_result(true)], &[], &sample_loads()).unwrap();
        // Flagged inside the section and repeated in the notices block
        assert_eq!(report.matches("NotAPlace").count(), 2);
        assert!(report.contains("NOTICES (1)"));
    }

    #[test]
    fn test_clean_report_states_no_fallbacks() {
        let project = Project::new("E", "J", "C");
        let report =
            render_report(&project.meta, &[sample_result(false)], &[], &sample_loads()).unwrap();
        assert!(report.contains("All lookups resolved"));
        assert!(!report.contains("NOTICE:"));
    }

    #[test]
    fn test_report_rejects_invalid_load_case() {
        let project = Project::new("E", "J", "C");
        let bad = LoadCase::new("Bad").with_load(LoadType::Dead, f64::NAN);
        let err = render_report(
            &project.meta,
            &[sample_result(false)],
            &asce7_lrfd_combinations(),
            &bad,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let project = Project::new("E", "J", "C");
        let a = render_report(
            &project.meta,
            &[sample_result(true)],
            &asce7_lrfd_combinations(),
            &sample_loads(),
        )
        .unwrap();
        let b = render_report(
            &project.meta,
            &[sample_result(true)],
            &asce7_lrfd_combinations(),
            &sample_loads(),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
