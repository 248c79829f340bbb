//! Parsed HTML documents.
//!
//! The only thing the validators need from a page is a list of candidate
//! hrefs, either page-wide or scoped to product containers.

use crate::error::{LinkCheckError, Result};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

/// Compile a CSS selector, e.g. the product container selector from config.
pub fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| LinkCheckError::invalid_selector(selector, e.to_string()))
}

/// Hrefs found inside product containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerHrefs {
    /// Number of container elements matched
    pub containers: usize,
    /// Literal href values of anchors inside those containers, in document order
    pub hrefs: Vec<String>,
}

/// A parsed HTML page.
#[derive(Debug)]
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
        }
    }

    /// Literal href values of every anchor on the page, in document order.
    #[must_use]
    pub fn anchor_hrefs(&self) -> Vec<String> {
        self.html
            .select(&ANCHOR)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// Literal href values of anchors nested in elements matching `container`.
    #[must_use]
    pub fn container_hrefs(&self, container: &Selector) -> ContainerHrefs {
        let mut scoped = ContainerHrefs::default();
        for item in self.html.select(container) {
            scoped.containers += 1;
            scoped.hrefs.extend(
                item.select(&ANCHOR)
                    .filter_map(|a| a.value().attr("href"))
                    .map(str::to_string),
            );
        }
        scoped
    }
}
