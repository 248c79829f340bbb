//! Product manifest model.
//!
//! The manifest is a JSON document of the shape
//! `{"versions": {"<product>": {"<platform>": "<version>" | null}}}`.
//! Document order is preserved so that findings come out in manifest order.

use crate::error::{ErrorContext, Result};
use crate::matching::should_ignore_product;
use indexmap::IndexMap;
use serde::Deserialize;

/// Platform key to version; `None` means the platform is not offered.
pub type PlatformMap = IndexMap<String, Option<String>>;

#[derive(Debug, Deserialize)]
struct ManifestDocument {
    #[serde(default)]
    versions: IndexMap<String, PlatformMap>,
}

/// Products retained for validation after filtering CLI/UI variants.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    products: IndexMap<String, PlatformMap>,
    total_count: usize,
}

impl Manifest {
    /// Decode a manifest document and drop ignored product variants.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: ManifestDocument =
            serde_json::from_str(content).context("decoding product manifest")?;
        Ok(Self::from_products(document.versions))
    }

    /// Build a manifest from already-decoded product entries.
    #[must_use]
    pub fn from_products(all_products: IndexMap<String, PlatformMap>) -> Self {
        let total_count = all_products.len();
        let products = all_products
            .into_iter()
            .filter(|(name, _)| !should_ignore_product(name))
            .collect();
        Self {
            products,
            total_count,
        }
    }

    /// Number of products listed in the document, before filtering.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of CLI/UI products dropped by the filter.
    #[must_use]
    pub fn ignored_count(&self) -> usize {
        self.total_count - self.products.len()
    }

    /// Number of products that will be validated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlatformMap)> {
        self.products.iter().map(|(name, map)| (name.as_str(), map))
    }

    /// Product names sorted lexicographically.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.products.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Platform map for a product.
    #[must_use]
    pub fn platforms(&self, product_name: &str) -> Option<&PlatformMap> {
        self.products.get(product_name)
    }
}

/// Manifest keys of the platforms a product is offered on, in manifest order.
pub fn available_platforms(platforms: &PlatformMap) -> impl Iterator<Item = &str> {
    platforms
        .iter()
        .filter(|(_, version)| version.is_some())
        .map(|(key, _)| key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "versions": {
            "GroupDocs.Viewer": {"net": "24.3", "java": "24.2", "nodejs-java": null, "python-net": "24.1"},
            "GroupDocs.Conversion-CLI": {"net": "24.1"},
            "GroupDocs.Editor.UI": {"net": "1.0"},
            "GroupDocs.Annotation": {"net": "24.1", "java": null}
        }
    }"#;

    #[test]
    fn test_filters_cli_and_ui_products() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.total_count(), 4);
        assert_eq!(manifest.ignored_count(), 2);
        assert_eq!(manifest.len(), 2);
        let names: Vec<&str> = manifest.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["GroupDocs.Viewer", "GroupDocs.Annotation"]);
    }

    #[test]
    fn test_sorted_names() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        assert_eq!(
            manifest.sorted_names(),
            ["GroupDocs.Annotation", "GroupDocs.Viewer"]
        );
    }

    #[test]
    fn test_available_platforms_skip_nulls() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let viewer = manifest.platforms("GroupDocs.Viewer").unwrap();
        let available: Vec<&str> = available_platforms(viewer).collect();
        assert_eq!(available, ["net", "java", "python-net"]);
    }

    #[test]
    fn test_missing_versions_field_is_empty() {
        let manifest = Manifest::from_json(r#"{"other": 1}"#).unwrap();
        assert!(manifest.is_empty());
        assert_eq!(manifest.total_count(), 0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Manifest::from_json("not json").is_err());
        assert!(Manifest::from_json(r#"{"versions": {"A": {"net": 5}}}"#).is_err());
    }
}
