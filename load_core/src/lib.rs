//! # load_core - Code-Based Load Generation Engine
//!
//! `load_core` computes structural design loads per ASCE 7-22 and the Thai
//! TIS/DPT provisions: gravity loads with live-load reduction, wind
//! pressures and base shear, equivalent-lateral-force seismic loads, and
//! the code-prescribed load combinations. All inputs and outputs are
//! JSON-serializable plain records.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculator is a pure function; the standards
//!   tables live in an explicit read-only repository passed by reference
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Loud Fallbacks**: default-zone substitutions are flagged in the
//!   result and the rendered report, never silently absorbed
//!
//! ## Quick Start
//!
//! ```rust
//! use load_core::calculators::{calculate_wind, WindCode};
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
//! println!("Base shear: {:.1} kip", result.get("base_shear_kip").unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`standards`] - material, wind-zone, and seismic-zone tables
//! - [`site`] - site, geometry, and load parameter inputs
//! - [`calculators`] - gravity, wind, and seismic calculators
//! - [`loads`] - load types, cases, and code combinations
//! - [`result`] - uniform calculator output structure
//! - [`report`] - deterministic plain-text report rendering
//! - [`project`] - project container, metadata, and settings
//! - [`units`] - unit conversion constants and helpers
//! - [`errors`] - structured error types

pub mod calculators;
pub mod errors;
pub mod loads;
pub mod project;
pub mod report;
pub mod result;
pub mod site;
pub mod standards;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use project::{GlobalSettings, Project, ProjectMetadata};
pub use result::{LoadCategory, LoadResult};
pub use standards::StandardsRepository;
