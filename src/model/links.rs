//! Found-links index for a single validation run.

use crate::matching::ProductSlugs;
use indexmap::IndexMap;
use serde::Serialize;

/// What a product's family page linked to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FamilyPageValidation {
    /// Absolute URL of the family page
    pub url: String,
    /// Canonical platform key to absolute URL, restricted to the product's own slugs
    pub found_platform_links: IndexMap<String, String>,
}

/// Every link discovered during a run, keyed for lookup by slug.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FoundLinks {
    /// Family slug to absolute URL
    pub family_links: IndexMap<String, String>,
    /// Product slug to canonical platform to absolute URL
    pub product_links: IndexMap<String, IndexMap<String, String>>,
    /// Product name to what its family page linked to
    pub family_page_validations: IndexMap<String, FamilyPageValidation>,
}

impl FoundLinks {
    /// Record a family link; the first occurrence of a slug wins.
    pub fn record_family_link(&mut self, slug: &str, url: String) -> bool {
        if self.family_links.contains_key(slug) {
            return false;
        }
        self.family_links.insert(slug.to_string(), url);
        true
    }

    /// Record a platform link; the first occurrence of a (slug, platform) pair wins.
    pub fn record_product_link(&mut self, slug: &str, platform: &str, url: String) -> bool {
        let platforms = self.product_links.entry(slug.to_string()).or_default();
        if platforms.contains_key(platform) {
            return false;
        }
        platforms.insert(platform.to_string(), url);
        true
    }

    /// Store the outcome of a family page check.
    pub fn record_family_page(&mut self, product_name: &str, validation: FamilyPageValidation) {
        self.family_page_validations
            .insert(product_name.to_string(), validation);
    }

    /// Family URL for the first slug variation that has one.
    #[must_use]
    pub fn family_url(&self, slugs: &ProductSlugs) -> Option<&str> {
        slugs
            .variations()
            .iter()
            .find_map(|variation| self.family_links.get(variation))
            .map(String::as_str)
    }

    /// Platform URL for the first slug variation that has one.
    #[must_use]
    pub fn platform_url(&self, slugs: &ProductSlugs, platform: &str) -> Option<&str> {
        slugs
            .variations()
            .iter()
            .find_map(|variation| self.product_links.get(variation)?.get(platform))
            .map(String::as_str)
    }

    /// Total number of platform links across all product slugs.
    #[must_use]
    pub fn platform_link_count(&self) -> usize {
        self.product_links.values().map(IndexMap::len).sum()
    }

    /// Canonical platforms seen anywhere in the product links (may repeat).
    pub fn observed_platforms(&self) -> impl Iterator<Item = &str> {
        self.product_links
            .values()
            .flat_map(|platforms| platforms.keys().map(String::as_str))
    }
}
