//! Product name normalization.
//!
//! Manifest names look like `GroupDocs.Viewer-UI`; landing page paths look
//! like `/viewer-ui/` or `/viewer/`. This module maps one onto the other.

/// Literal prefix stripped from every manifest product name.
pub const PRODUCT_PREFIX: &str = "GroupDocs.";

/// Suffixes (lowercased) that mark product variants excluded from validation.
const IGNORED_SUFFIXES: &[&str] = &["-cli", ".ui", "-ui"];

/// Slug candidates derived from a single manifest product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSlugs {
    canonical: String,
    variations: Vec<String>,
}

impl ProductSlugs {
    /// Derive the canonical slug and its ordered variations from a raw name.
    #[must_use]
    pub fn from_name(product_name: &str) -> Self {
        let canonical = normalize_product_name(product_name);
        let mut variations = vec![canonical.clone()];

        if let Some(stripped) = canonical.strip_suffix("-ui") {
            variations.push(stripped.to_string());
        }
        if let Some(stripped) = canonical.strip_suffix("-cli") {
            variations.push(stripped.to_string());
        }

        Self {
            canonical,
            variations,
        }
    }

    /// The normalized slug before any suffix stripping.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// First variation; used when reporting an expected path.
    #[must_use]
    pub fn primary(&self) -> &str {
        // variations always starts with the canonical slug
        &self.canonical
    }

    /// All candidate slugs, canonical first. Lookups take the first hit.
    #[must_use]
    pub fn variations(&self) -> &[String] {
        &self.variations
    }

    /// Whether `slug` is one of this product's variations.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.variations.iter().any(|v| v == slug)
    }

    /// Variations joined for error messages, e.g. `editor-ui, editor`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.variations.join(", ")
    }
}

/// Normalize a manifest product name into a URL slug.
///
/// Strips the `GroupDocs.` prefix, lowercases, and turns dots into hyphens:
/// `GroupDocs.Total` becomes `total`, `GroupDocs.Editor.Cloud` becomes
/// `editor-cloud`.
#[must_use]
pub fn normalize_product_name(product_name: &str) -> String {
    product_name
        .replace(PRODUCT_PREFIX, "")
        .trim()
        .to_lowercase()
        .replace('.', "-")
}

/// Whether a manifest product is a CLI or UI variant that is never validated.
#[must_use]
pub fn should_ignore_product(product_name: &str) -> bool {
    let lower = product_name.to_lowercase();
    IGNORED_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}
