//! Name and platform matching.
//!
//! Everything that reconciles manifest vocabulary with URL path segments
//! lives here. Nothing in this module performs I/O.

mod normalize;
pub mod platform;

pub use normalize::{
    PRODUCT_PREFIX, ProductSlugs, normalize_product_name, should_ignore_product,
};
pub use platform::{
    PLATFORM_ORDER, PLATFORM_URL_TOKENS, manifest_key, platform_header, platform_slug,
    sort_platforms,
};
