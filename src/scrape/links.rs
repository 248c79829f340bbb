//! Href pattern matching.
//!
//! Pure functions over href strings. Family pages live at `/<slug>/`,
//! platform pages at `/<slug>/<token>/` where the token is one of
//! [`PLATFORM_URL_TOKENS`](crate::matching::PLATFORM_URL_TOKENS).

use crate::error::{LinkCheckError, Result, ScrapeErrorKind};
use crate::matching::{ProductSlugs, platform_slug};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static FAMILY_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([^/]+)/$").expect("static regex"));

static PLATFORM_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/([^/]+)/(net|java|nodejs-java|python-net)/$").expect("static regex")
});

/// Relative hrefs scraped from the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingLinks {
    /// Family slug to href
    pub family: IndexMap<String, String>,
    /// Product slug to canonical platform to href
    pub products: IndexMap<String, IndexMap<String, String>>,
}

/// Slug of a family page href (`/total/` gives `total`).
#[must_use]
pub fn family_slug(href: &str) -> Option<String> {
    FAMILY_HREF
        .captures(href)
        .map(|caps| caps[1].to_lowercase())
}

/// Slug and canonical platform of a site-relative platform page href.
///
/// `/total/python-net/` gives `("total", "python")`. Absolute URLs are not
/// considered.
#[must_use]
pub fn platform_link(href: &str) -> Option<(String, String)> {
    if !href.starts_with('/') {
        return None;
    }
    let caps = PLATFORM_HREF.captures(href)?;
    Some((
        caps[1].to_lowercase(),
        platform_slug(&caps[2]).to_string(),
    ))
}

/// Family links from container-scoped hrefs; the first href per slug wins.
pub fn collect_family_links<'a, I>(hrefs: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut family = IndexMap::new();
    for href in hrefs {
        if let Some(slug) = family_slug(href) {
            family.entry(slug).or_insert_with(|| href.to_string());
        }
    }
    family
}

/// Platform links from page-wide hrefs; the first href per (slug, platform) wins.
pub fn collect_platform_links<'a, I>(hrefs: I) -> IndexMap<String, IndexMap<String, String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut products: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
    for href in hrefs {
        if let Some((slug, platform)) = platform_link(href) {
            products
                .entry(slug)
                .or_default()
                .entry(platform)
                .or_insert_with(|| href.to_string());
        }
    }
    products
}

/// Platform links on a family page that belong to `slugs`.
///
/// Links to other products are ignored. A later href for the same platform
/// replaces an earlier one.
pub fn collect_family_page_links<'a, I>(hrefs: I, slugs: &ProductSlugs) -> IndexMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut found = IndexMap::new();
    for href in hrefs {
        if let Some((slug, platform)) = platform_link(href)
            && slugs.contains(&slug)
        {
            found.insert(platform, href.to_string());
        }
    }
    found
}

/// Resolve a scraped href against the site origin.
pub fn resolve_href(base: &Url, href: &str) -> Result<String> {
    base.join(href).map(|url| url.to_string()).map_err(|e| {
        LinkCheckError::scrape(
            "resolving href",
            ScrapeErrorKind::UnresolvableHref {
                href: href.to_string(),
                base: base.to_string(),
                reason: e.to_string(),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_slug_shape() {
        assert_eq!(family_slug("/total/"), Some("total".to_string()));
        assert_eq!(family_slug("/Viewer/"), Some("viewer".to_string()));
        assert_eq!(family_slug("/total"), None);
        assert_eq!(family_slug("/total/net/"), None);
        assert_eq!(family_slug("https://products.groupdocs.com/total/"), None);
        assert_eq!(family_slug("//"), None);
    }

    #[test]
    fn test_platform_tokens_map_to_canonical_keys() {
        assert_eq!(
            platform_link("/total/python-net/"),
            Some(("total".to_string(), "python".to_string()))
        );
        assert_eq!(
            platform_link("/total/nodejs-java/"),
            Some(("total".to_string(), "nodejs".to_string()))
        );
        assert_eq!(
            platform_link("/Viewer/net/"),
            Some(("viewer".to_string(), "net".to_string()))
        );
    }

    #[test]
    fn test_platform_link_rejects_other_shapes() {
        assert_eq!(platform_link("/total/ruby/"), None);
        assert_eq!(platform_link("/total/net"), None);
        assert_eq!(platform_link("https://products.groupdocs.com/total/net/"), None);
        assert_eq!(platform_link("/total/"), None);
    }

    #[test]
    fn test_platform_link_uses_last_two_segments() {
        assert_eq!(
            platform_link("/en/viewer/java/"),
            Some(("viewer".to_string(), "java".to_string()))
        );
    }

    #[test]
    fn test_collect_family_links_first_wins() {
        let family = collect_family_links(["/total/", "/Total/", "/viewer/", "/total/net/"]);
        assert_eq!(family.len(), 2);
        assert_eq!(family["total"], "/total/");
        assert_eq!(family["viewer"], "/viewer/");
    }

    #[test]
    fn test_collect_platform_links_first_wins() {
        let products = collect_platform_links([
            "/total/net/",
            "/en/total/net/",
            "/total/java/",
            "/viewer/python-net/",
        ]);
        assert_eq!(products["total"]["net"], "/total/net/");
        assert_eq!(products["total"]["java"], "/total/java/");
        assert_eq!(products["viewer"]["python"], "/viewer/python-net/");
    }

    #[test]
    fn test_family_page_links_restricted_to_own_slugs() {
        let slugs = ProductSlugs::from_name("GroupDocs.Editor-UI");
        let found = collect_family_page_links(
            [
                "/editor/net/",
                "/viewer/java/",
                "/editor-ui/java/",
                "/en/editor/net/",
            ],
            &slugs,
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found["net"], "/en/editor/net/");
        assert_eq!(found["java"], "/editor-ui/java/");
    }

    #[test]
    fn test_resolve_href() {
        let base = Url::parse("https://products.groupdocs.com").unwrap();
        assert_eq!(
            resolve_href(&base, "/total/net/").unwrap(),
            "https://products.groupdocs.com/total/net/"
        );
    }
}
