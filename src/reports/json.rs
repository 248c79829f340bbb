//! JSON link index generator.
//!
//! Mirrors the manifest layout: one object per product, keyed by the
//! manifest's own platform keys, with the family page under `family`.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::matching::{ProductSlugs, manifest_key, platform_slug};
use crate::model::{ValidationRun, available_platforms};
use chrono::SecondsFormat;
use indexmap::IndexMap;
use serde::Serialize;

/// Links for one product; `None` marks a platform that should have a link but has none.
pub type ProductLinks = IndexMap<String, Option<String>>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLinkIndex {
    generated_at: String,
    links: IndexMap<String, ProductLinks>,
}

/// JSON reporter. Output is always pretty printed with two-space indent.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Build the per-product link map, products sorted by name.
#[must_use]
pub fn build_link_index(run: &ValidationRun) -> IndexMap<String, ProductLinks> {
    let mut index = IndexMap::new();

    for name in run.manifest.sorted_names() {
        let slugs = ProductSlugs::from_name(name);
        let mut links = ProductLinks::new();

        if let Some(url) = run.found.family_url(&slugs) {
            links.insert("family".to_string(), Some(url.to_string()));
        }

        if let Some(platforms) = run.manifest.platforms(name) {
            for platform in available_platforms(platforms) {
                let slug = platform_slug(platform);
                let url = run.found.platform_url(&slugs, slug).map(str::to_string);
                links.insert(manifest_key(slug).to_string(), url);
            }
        }

        index.insert(name.to_string(), links);
    }

    index
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, run: &ValidationRun) -> Result<String, ReportError> {
        let report = JsonLinkIndex {
            generated_at: run
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            links: build_link_index(run),
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
