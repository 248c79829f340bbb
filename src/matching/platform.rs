//! Platform vocabulary.
//!
//! Three key spaces meet here:
//! - manifest keys: `net`, `java`, `nodejs-java`, `python-net`
//! - URL tokens in platform page paths (same literals as manifest keys)
//! - canonical platform keys used in the found-links index: `net`, `java`,
//!   `nodejs`, `python`
//!
//! Keys outside the known vocabulary pass through unchanged.

use std::collections::BTreeSet;

/// URL tokens recognised as the trailing segment of a platform page path.
pub const PLATFORM_URL_TOKENS: &[&str] = &["net", "java", "nodejs-java", "python-net"];

/// Preferred column order for canonical platforms.
pub const PLATFORM_ORDER: &[&str] = &["net", "java", "nodejs", "python"];

/// Canonical platform key for a manifest key or URL token.
///
/// `python-net` maps to `python` and `nodejs-java` to `nodejs`; everything
/// else maps to itself.
#[must_use]
pub fn platform_slug(key: &str) -> &str {
    match key {
        "nodejs-java" => "nodejs",
        "python-net" => "python",
        other => other,
    }
}

/// Manifest key for a canonical platform; inverse of [`platform_slug`].
#[must_use]
pub fn manifest_key(slug: &str) -> &str {
    match slug {
        "nodejs" => "nodejs-java",
        "python" => "python-net",
        other => other,
    }
}

/// Column header used in the Markdown report.
#[must_use]
pub fn platform_header(slug: &str) -> &str {
    match slug {
        "net" => ".NET",
        "java" => "Java",
        "nodejs" => "Node.js via Java",
        "python" => "Python via .NET",
        other => other,
    }
}

/// Order canonical platforms: preferred order first, unknown ones alphabetically.
#[must_use]
pub fn sort_platforms<'a, I>(platforms: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = platforms.into_iter().collect();
    let mut sorted: Vec<&str> = unique.into_iter().collect();
    sorted.sort_by_key(|p| {
        let rank = PLATFORM_ORDER
            .iter()
            .position(|known| known == p)
            .unwrap_or(usize::MAX);
        (rank, *p)
    });
    sorted.into_iter().map(str::to_string).collect()
}
