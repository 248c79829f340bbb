//! Data model for a validation run.
//!
//! - [`Manifest`]: the authoritative product list and per-platform availability
//! - [`FoundLinks`]: every link the scrapers discovered
//! - [`ValidationRun`]: the context object each pipeline stage works on

mod links;
mod manifest;
mod run;

pub use links::{FamilyPageValidation, FoundLinks};
pub use manifest::{Manifest, PlatformMap, available_platforms};
pub use run::{Findings, ValidationRun};
