//! Default values for landing-links configuration.

/// Authoritative product manifest.
pub const DEFAULT_MANIFEST_URL: &str = "https://raw.githubusercontent.com/vladimir-litvinchik/groupdocs-product-grid/refs/heads/main/product_versions.json";

/// Landing page under validation.
pub const DEFAULT_LANDING_PAGE_URL: &str = "https://products.groupdocs.com/";

/// Origin that relative hrefs are resolved against.
pub const DEFAULT_SITE_ORIGIN: &str = "https://products.groupdocs.com";

/// Elements on the landing page that hold a product's family link.
pub const DEFAULT_CONTAINER_SELECTOR: &str = "div.product-item";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Markdown report file name.
pub const DEFAULT_MARKDOWN_REPORT: &str = "validation_report.md";

/// JSON link index file name.
pub const DEFAULT_JSON_REPORT: &str = "product_links.json";
