//! Landing page stage: scrape the landing page and cross-reference it
//! against the manifest.

use super::PipelineError;
use crate::config::ValidatorConfig;
use crate::error::LinkCheckError;
use crate::fetch::PageFetcher;
use crate::matching::{ProductSlugs, platform_slug};
use crate::model::{ValidationRun, available_platforms};
use crate::scrape::{
    LandingLinks, PageDocument, compile_selector, resolve_href, scrape_landing_page,
};
use url::Url;

/// Fatal landing page failures. The display text is recorded verbatim as
/// an error finding.
#[derive(Debug, thiserror::Error)]
pub enum LandingPageError {
    #[error("Failed to fetch landing page: {0}")]
    Unreachable(String),

    #[error("Landing page returned status {0}")]
    Status(u16),

    #[error("Landing page content is empty or too short")]
    Empty,

    #[error("Failed to parse landing page: {0}")]
    Unparseable(String),
}

/// Fetch and parse the landing page.
///
/// Only an exact 200 with at least `min_content_length` non-blank
/// characters is accepted.
pub fn load_landing_page(
    fetcher: &dyn PageFetcher,
    url: &str,
    min_content_length: usize,
) -> Result<PageDocument, LandingPageError> {
    let page = fetcher
        .fetch(url)
        .map_err(|e| LandingPageError::Unreachable(e.display_chain()))?;
    if !page.is_ok() {
        return Err(LandingPageError::Status(page.status));
    }
    if !page.has_content(min_content_length) {
        return Err(LandingPageError::Empty);
    }
    Ok(PageDocument::parse(&page.body))
}

/// Scrape the landing page and record every link, resolved against `origin`.
///
/// An href the origin cannot be joined with is dropped with a warning; it
/// never counts as a found link.
fn collect_landing_links(
    fetcher: &dyn PageFetcher,
    config: &ValidatorConfig,
    origin: &Url,
    run: &mut ValidationRun,
) -> Result<LandingLinks, LandingPageError> {
    let container = compile_selector(&config.scraping.container_selector)
        .map_err(|e| LandingPageError::Unparseable(e.display_chain()))?;
    let document = load_landing_page(
        fetcher,
        &config.sources.landing_page_url,
        config.scraping.min_content_length,
    )?;

    let (containers, mut links) = scrape_landing_page(&document, &container);
    tracing::info!("Found {containers} product items on landing page");

    let ValidationRun {
        found, findings, ..
    } = run;
    let mut skip = |e: LinkCheckError| {
        let message = format!("Skipped landing page link: {}", e.display_chain());
        tracing::warn!("{message}");
        findings.warning(message);
    };

    links.family.retain(|slug, href| match resolve_href(origin, href) {
        Ok(url) => {
            tracing::info!("  Found family link: {slug} -> {href}");
            found.record_family_link(slug, url);
            true
        }
        Err(e) => {
            skip(e);
            false
        }
    });
    for (slug, platforms) in &mut links.products {
        platforms.retain(|platform, href| match resolve_href(origin, href) {
            Ok(url) => {
                tracing::debug!("  Found {platform} link: {slug} -> {href}");
                found.record_product_link(slug, platform, url);
                true
            }
            Err(e) => {
                skip(e);
                false
            }
        });
    }
    links.products.retain(|_, platforms| !platforms.is_empty());

    Ok(links)
}

/// Scrape the landing page into `run` and check every manifest product
/// against it.
pub fn scrape_landing_stage(
    run: &mut ValidationRun,
    fetcher: &dyn PageFetcher,
    config: &ValidatorConfig,
    origin: &Url,
) -> Result<(), PipelineError> {
    tracing::info!(
        "Fetching landing page from {}...",
        config.sources.landing_page_url
    );

    let links = match collect_landing_links(fetcher, config, origin, run) {
        Ok(links) => links,
        Err(e) => {
            tracing::error!("{e}");
            run.findings.error(e.to_string());
            return Err(e.into());
        }
    };

    cross_reference(run, &links);
    Ok(())
}

/// Check each manifest product for a family link and one link per
/// available platform.
///
/// A missing family link does not suppress the platform checks.
pub fn cross_reference(run: &mut ValidationRun, links: &LandingLinks) {
    tracing::info!("=== Validating Landing Page Products ===");

    let ValidationRun {
        manifest, findings, ..
    } = run;

    for (name, platforms) in manifest.iter() {
        let slugs = ProductSlugs::from_name(name);

        match slugs
            .variations()
            .iter()
            .find(|variation| links.family.contains_key(variation.as_str()))
        {
            Some(variation) => tracing::info!("✓ {name} has family link ({variation})"),
            None => findings.error(format!(
                "Product '{name}' missing family link on landing page (tried: {})",
                slugs.joined()
            )),
        }

        for platform in available_platforms(platforms) {
            let slug = platform_slug(platform);
            let listed = slugs.variations().iter().any(|variation| {
                links
                    .products
                    .get(variation.as_str())
                    .is_some_and(|found| found.contains_key(slug))
            });

            if listed {
                tracing::info!("  ✓ {name} {platform} link found");
            } else {
                findings.error(format!(
                    "Product '{name}' missing {platform} link on landing page"
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::fetch::FetchedPage;
    use crate::model::Manifest;
    use crate::scrape::{collect_family_links, collect_platform_links};

    struct Fixed(u16, String);

    impl PageFetcher for Fixed {
        fn fetch(&self, _url: &str) -> Result<FetchedPage> {
            Ok(FetchedPage {
                status: self.0,
                body: self.1.clone(),
            })
        }
    }

    fn links(family: &[&str], anchors: &[&str]) -> LandingLinks {
        LandingLinks {
            family: collect_family_links(family.iter().copied()),
            products: collect_platform_links(anchors.iter().copied()),
        }
    }

    fn run_for(manifest: &str) -> ValidationRun {
        let mut run = ValidationRun::new("https://products.groupdocs.com/");
        run.manifest = Manifest::from_json(manifest).unwrap();
        run
    }

    #[test]
    fn test_total_scenario() {
        let mut run = run_for(
            r#"{"versions": {"GroupDocs.Total": {"net": "24.1", "java": "24.1", "python-net": null}}}"#,
        );
        cross_reference(&mut run, &links(&["/total/", "/total/net/"], &["/total/", "/total/net/"]));

        assert_eq!(
            run.findings.errors,
            vec!["Product 'GroupDocs.Total' missing java link on landing page".to_string()]
        );
    }

    #[test]
    fn test_missing_family_still_checks_platforms() {
        let mut run = run_for(r#"{"versions": {"GroupDocs.Signature": {"nodejs-java": "1"}}}"#);
        cross_reference(&mut run, &links(&[], &[]));

        assert_eq!(
            run.findings.errors,
            vec![
                "Product 'GroupDocs.Signature' missing family link on landing page (tried: signature)"
                    .to_string(),
                "Product 'GroupDocs.Signature' missing nodejs-java link on landing page".to_string(),
            ]
        );
    }

    #[test]
    fn test_other_products_links_do_not_count() {
        let mut run = run_for(r#"{"versions": {"GroupDocs.Viewer": {"python-net": "1"}}}"#);
        cross_reference(&mut run, &links(&["/viewer/"], &["/total/python-net/"]));
        assert_eq!(
            run.findings.errors,
            vec!["Product 'GroupDocs.Viewer' missing python-net link on landing page".to_string()]
        );
    }

    #[test]
    fn test_landing_page_status_is_fatal() {
        let err = load_landing_page(&Fixed(503, "x".repeat(200)), "https://p/", 100).unwrap_err();
        assert_eq!(err.to_string(), "Landing page returned status 503");
    }

    #[test]
    fn test_short_landing_page_is_fatal() {
        let err = load_landing_page(&Fixed(200, format!("  {}  ", "x".repeat(99))), "https://p/", 100)
            .unwrap_err();
        assert_eq!(err.to_string(), "Landing page content is empty or too short");
    }

    #[test]
    fn test_unreachable_landing_page_is_recorded() {
        struct Offline;
        impl PageFetcher for Offline {
            fn fetch(&self, url: &str) -> Result<FetchedPage> {
                Err(LinkCheckError::network(url, "timed out"))
            }
        }

        let config = ValidatorConfig::default();
        let origin = Url::parse(&config.sources.site_origin).unwrap();
        let mut run = ValidationRun::new(config.sources.landing_page_url.clone());
        let err = scrape_landing_stage(&mut run, &Offline, &config, &origin).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::LandingPageFailed(LandingPageError::Unreachable(_))
        ));
        assert!(run.findings.errors[0].starts_with("Failed to fetch landing page: "));
        assert!(run.findings.errors[0].contains("timed out"));
    }

    #[test]
    fn test_links_are_resolved_against_origin() {
        let body = format!(
            r#"<html><body><div class="product-item"><a href="/total/">Total</a></div>
            <a href="/total/java/">Java</a>{}</body></html>"#,
            " ".repeat(10) + &"<p>filler</p>".repeat(10)
        );
        let config = ValidatorConfig::default();
        let origin = Url::parse(&config.sources.site_origin).unwrap();
        let mut run = run_for(r#"{"versions": {"GroupDocs.Total": {"java": "1"}}}"#);

        scrape_landing_stage(&mut run, &Fixed(200, body), &config, &origin).unwrap();

        assert_eq!(
            run.found.family_links["total"],
            "https://products.groupdocs.com/total/"
        );
        assert_eq!(
            run.found.product_links["total"]["java"],
            "https://products.groupdocs.com/total/java/"
        );
        assert!(run.findings.is_clean());
    }

    #[test]
    fn test_unresolvable_href_is_skipped() {
        let body = format!(
            r#"<html><body><div class="product-item"><a href="/total/">Total</a></div>
            <a href="/total/net/">.NET</a>{}<footer><a href="//[bad/net/">Broken</a></footer></body></html>"#,
            "<p>filler</p>".repeat(10)
        );
        let config = ValidatorConfig::default();
        let origin = Url::parse(&config.sources.site_origin).unwrap();
        let mut run = run_for(r#"{"versions": {"GroupDocs.Total": {"net": "1"}}}"#);

        scrape_landing_stage(&mut run, &Fixed(200, body), &config, &origin).unwrap();

        assert!(!run.findings.has_errors(), "{:?}", run.findings.errors);
        assert_eq!(run.findings.warnings.len(), 1);
        assert!(run.findings.warnings[0].starts_with("Skipped landing page link: "));
        assert!(run.findings.warnings[0].contains("//[bad/net/"));
        assert_eq!(
            run.found.product_links["total"]["net"],
            "https://products.groupdocs.com/total/net/"
        );
        assert_eq!(run.found.product_links.len(), 1);
    }
}
