//! Manifest stage: fetch and decode the product version manifest.

use super::PipelineError;
use crate::error::{ErrorContext, LinkCheckError, ManifestErrorKind, Result};
use crate::fetch::PageFetcher;
use crate::model::{Manifest, ValidationRun};

/// Fetch the manifest at `url` and drop ignored products.
///
/// A non-success status, an undecodable body, or a manifest with nothing
/// left to validate are all errors.
pub fn load_manifest(fetcher: &dyn PageFetcher, url: &str) -> Result<Manifest> {
    let page = fetcher.fetch(url).context("fetching product manifest")?;
    if !page.is_success() {
        return Err(LinkCheckError::http_status(url, page.status));
    }

    let manifest = Manifest::from_json(&page.body)?;
    tracing::info!("Found {} total products in JSON", manifest.total_count());
    tracing::info!("Ignoring {} CLI/UI products", manifest.ignored_count());

    if manifest.is_empty() {
        return Err(LinkCheckError::manifest(
            format!("filtering {url}"),
            ManifestErrorKind::NoProducts,
        ));
    }
    tracing::info!("Validating {} products", manifest.len());
    Ok(manifest)
}

/// Load the manifest into `run`.
///
/// On failure the message is also recorded as an error finding so it shows
/// up in the summary.
pub fn manifest_stage(
    run: &mut ValidationRun,
    fetcher: &dyn PageFetcher,
    url: &str,
) -> std::result::Result<(), PipelineError> {
    tracing::info!("Fetching product versions from {url}...");
    match load_manifest(fetcher, url) {
        Ok(manifest) => {
            run.manifest = manifest;
            Ok(())
        }
        Err(e) => {
            let err = PipelineError::ManifestFailed {
                reason: e.display_chain(),
            };
            tracing::error!("{err}");
            run.findings.error(err.to_string());
            Err(err)
        }
    }
}
