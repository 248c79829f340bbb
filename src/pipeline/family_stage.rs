//! Family page stage: every family page found on the landing page must
//! link onward to the product's platform pages.

use crate::error::{ErrorContext, Result};
use crate::fetch::PageFetcher;
use crate::matching::{ProductSlugs, platform_slug};
use crate::model::{FamilyPageValidation, ValidationRun, available_platforms};
use crate::scrape::{PageDocument, collect_family_page_links, resolve_href};
use url::Url;

/// Outcome of fetching and scanning one family page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyPageCheck {
    /// The page answered with something other than 200
    Status(u16),
    /// The page body was blank or shorter than the minimum
    Empty,
    /// The page was scanned; platform links were collected
    Scanned(FamilyPageValidation),
}

/// Fetch the family page at `url` and collect its links to `slugs`' platform pages.
pub fn check_family_page(
    fetcher: &dyn PageFetcher,
    url: &str,
    slugs: &ProductSlugs,
    origin: &Url,
    min_content_length: usize,
) -> Result<FamilyPageCheck> {
    let page = fetcher
        .fetch(url)
        .with_context(|| format!("fetching family page {url}"))?;
    if !page.is_ok() {
        return Ok(FamilyPageCheck::Status(page.status));
    }
    if !page.has_content(min_content_length) {
        return Ok(FamilyPageCheck::Empty);
    }

    let document = PageDocument::parse(&page.body);
    let hrefs = document.anchor_hrefs();
    let mut validation = FamilyPageValidation {
        url: url.to_string(),
        ..FamilyPageValidation::default()
    };
    for (platform, href) in collect_family_page_links(hrefs.iter().map(String::as_str), slugs) {
        let resolved = resolve_href(origin, &href)?;
        validation.found_platform_links.insert(platform, resolved);
    }
    Ok(FamilyPageCheck::Scanned(validation))
}

/// Check the family page of every manifest product that has one.
///
/// Products without a family link are skipped; the landing page stage has
/// already reported them. Failures stay scoped to their product.
pub fn validate_family_pages(
    run: &mut ValidationRun,
    fetcher: &dyn PageFetcher,
    origin: &Url,
    min_content_length: usize,
) {
    tracing::info!("=== Validating Family Pages ===");

    let ValidationRun {
        manifest,
        found,
        findings,
        ..
    } = run;

    for (name, platforms) in manifest.iter() {
        let slugs = ProductSlugs::from_name(name);
        let Some(family_url) = found.family_url(&slugs).map(str::to_string) else {
            continue;
        };
        tracing::info!("Validating family page for '{name}': {family_url}");

        match check_family_page(fetcher, &family_url, &slugs, origin, min_content_length) {
            Ok(FamilyPageCheck::Status(status)) => findings.error(format!(
                "Family page for '{name}' returned status {status}: {family_url}"
            )),
            Ok(FamilyPageCheck::Empty) => findings.error(format!(
                "Family page for '{name}' is empty or too short: {family_url}"
            )),
            Ok(FamilyPageCheck::Scanned(validation)) => {
                for platform in available_platforms(platforms) {
                    if validation
                        .found_platform_links
                        .contains_key(platform_slug(platform))
                    {
                        tracing::info!("  ✓ Found {platform} link on family page");
                    } else {
                        findings.error(format!(
                            "Family page for '{name}' missing {platform} link (expected: /{}/{platform}/)",
                            slugs.primary()
                        ));
                    }
                }
                found.record_family_page(name, validation);
            }
            Err(e) => findings.error(format!(
                "Failed to validate family page for '{name}': {}",
                e.display_chain()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkCheckError;
    use crate::fetch::FetchedPage;
    use crate::model::Manifest;
    use std::collections::HashMap;

    const ORIGIN: &str = "https://products.groupdocs.com";
    const TOTAL: &str = "https://products.groupdocs.com/total/";

    struct Pages(HashMap<&'static str, (u16, String)>);

    impl PageFetcher for Pages {
        fn fetch(&self, url: &str) -> Result<FetchedPage> {
            let (status, body) = self
                .0
                .get(url)
                .cloned()
                .ok_or_else(|| LinkCheckError::network(url, "connection reset"))?;
            Ok(FetchedPage { status, body })
        }
    }

    fn family_page(anchors: &[&str]) -> String {
        let links: String = anchors
            .iter()
            .map(|href| format!(r#"<a href="{href}">link</a>"#))
            .collect();
        format!("<html><body><h1>GroupDocs.Total product family</h1>{links}</body></html>")
    }

    fn total_run() -> ValidationRun {
        let mut run = ValidationRun::new("https://products.groupdocs.com/");
        run.manifest = Manifest::from_json(
            r#"{"versions": {"GroupDocs.Total": {"net": "24.1", "java": "24.1", "python-net": "24.1"}}}"#,
        )
        .unwrap();
        run.found.record_family_link("total", TOTAL.to_string());
        run
    }

    fn origin() -> Url {
        Url::parse(ORIGIN).unwrap()
    }

    #[test]
    fn test_missing_platform_reports_expected_path() {
        let fetcher = Pages(HashMap::from([(
            TOTAL,
            (
                200,
                family_page(&["/total/net/", "/total/java/", "/viewer/python-net/"]),
            ),
        )]));
        let mut run = total_run();
        validate_family_pages(&mut run, &fetcher, &origin(), 100);

        assert_eq!(
            run.findings.errors,
            vec![
                "Family page for 'GroupDocs.Total' missing python-net link (expected: /total/python-net/)"
                    .to_string()
            ]
        );
        let validation = &run.found.family_page_validations["GroupDocs.Total"];
        assert_eq!(validation.url, TOTAL);
        assert_eq!(
            validation.found_platform_links["java"],
            "https://products.groupdocs.com/total/java/"
        );
        assert!(!validation.found_platform_links.contains_key("python"));
    }

    #[test]
    fn test_not_found_stops_product_checks() {
        let fetcher = Pages(HashMap::from([(TOTAL, (404, String::new()))]));
        let mut run = total_run();
        validate_family_pages(&mut run, &fetcher, &origin(), 100);

        assert_eq!(
            run.findings.errors,
            vec![format!(
                "Family page for 'GroupDocs.Total' returned status 404: {TOTAL}"
            )]
        );
        assert!(run.found.family_page_validations.is_empty());
    }

    #[test]
    fn test_short_page_is_reported() {
        let fetcher = Pages(HashMap::from([(TOTAL, (200, "   tiny   ".to_string()))]));
        let mut run = total_run();
        validate_family_pages(&mut run, &fetcher, &origin(), 100);

        assert_eq!(
            run.findings.errors,
            vec![format!(
                "Family page for 'GroupDocs.Total' is empty or too short: {TOTAL}"
            )]
        );
    }

    #[test]
    fn test_fetch_failure_is_scoped_to_product() {
        let fetcher = Pages(HashMap::new());
        let mut run = total_run();
        validate_family_pages(&mut run, &fetcher, &origin(), 100);

        assert_eq!(run.findings.errors.len(), 1);
        assert!(
            run.findings.errors[0]
                .starts_with("Failed to validate family page for 'GroupDocs.Total': ")
        );
        assert!(run.findings.errors[0].contains("connection reset"));
    }

    #[test]
    fn test_products_without_family_link_are_skipped() {
        let fetcher = Pages(HashMap::new());
        let mut run = total_run();
        run.found = Default::default();
        validate_family_pages(&mut run, &fetcher, &origin(), 100);
        assert!(run.findings.is_clean());
    }

    #[test]
    fn test_last_link_per_platform_wins() {
        let page = family_page(&["/total/java/", "/Total/java/"]);
        let fetcher = Pages(HashMap::from([(TOTAL, (200, page))]));
        let slugs = ProductSlugs::from_name("GroupDocs.Total");

        let check = check_family_page(&fetcher, TOTAL, &slugs, &origin(), 100).unwrap();
        let FamilyPageCheck::Scanned(validation) = check else {
            panic!("expected a scanned page, got {check:?}");
        };
        assert_eq!(validation.found_platform_links.len(), 1);
        assert_eq!(
            validation.found_platform_links["java"],
            "https://products.groupdocs.com/Total/java/"
        );
    }
}
