//! Load calculators
//!
//! One entry point per hazard, each a pure function over the site,
//! geometry, and load parameter structs:
//!
//! - [`gravity::calculate_gravity`] - dead, live, and reduced-live loads
//! - [`wind::calculate_wind`] - wind pressures and base shear
//! - [`seismic::calculate_seismic`] - seismic base shear and story forces
//!
//! Every calculator validates its inputs at the boundary, returns a fully
//! populated [`crate::result::LoadResult`] or an error, and carries any
//! default-zone substitution as a result warning.

pub mod gravity;
pub mod seismic;
pub mod wind;

pub use gravity::{calculate_gravity, flat_roof_snow_psf, live_load_reduction_factor};
pub use seismic::{calculate_seismic, seismic_design_category, SeismicCode};
pub use wind::{calculate_wind, WindCode};
