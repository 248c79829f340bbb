//! HTML scraping for landing and family pages.
//!
//! [`PageDocument`] hides the HTML parser and hands out candidate hrefs;
//! the functions in [`links`] decide which of those hrefs are family or
//! platform links. The split keeps the matching rules testable against
//! plain string fixtures.

mod document;
pub mod links;

pub use document::{ContainerHrefs, PageDocument, compile_selector};
pub use links::{
    LandingLinks, collect_family_links, collect_family_page_links, collect_platform_links,
    family_slug, platform_link, resolve_href,
};

use scraper::Selector;

/// Scrape the landing page: container-scoped family links plus page-wide
/// platform links.
///
/// Returns the number of product containers seen alongside the links.
#[must_use]
pub fn scrape_landing_page(document: &PageDocument, container: &Selector) -> (usize, LandingLinks) {
    let scoped = document.container_hrefs(container);
    let anchors = document.anchor_hrefs();

    let links = LandingLinks {
        family: collect_family_links(scoped.hrefs.iter().map(String::as_str)),
        products: collect_platform_links(anchors.iter().map(String::as_str)),
    };
    (scoped.containers, links)
}
