//! Unified error types for landing-links.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and operator-facing messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for landing-links operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LinkCheckError {
    /// Errors while talking to a remote server
    #[error("Fetch failed: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors while decoding the product manifest
    #[error("Invalid manifest: {context}")]
    Manifest {
        context: String,
        #[source]
        source: ManifestErrorKind,
    },

    /// Errors while parsing HTML or resolving hrefs
    #[error("Scrape failed: {context}")]
    Scrape {
        context: String,
        #[source]
        source: ScrapeErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {}: {message}", path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific fetch error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to read response body: {0}")]
    BodyError(String),
}

/// Specific manifest error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ManifestErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Manifest lists no products to validate")]
    NoProducts,
}

/// Specific scrape error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrapeErrorKind {
    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Cannot resolve '{href}' against {base}: {reason}")]
    UnresolvableHref {
        href: String,
        base: String,
        reason: String,
    },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for landing-links operations
pub type Result<T> = std::result::Result<T, LinkCheckError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl LinkCheckError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a network error for a failed request
    pub fn network(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::fetch(
            format!("requesting {}", url.into()),
            FetchErrorKind::NetworkError(err.to_string()),
        )
    }

    /// Create an error for a response with an unexpected status
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        let url = url.into();
        Self::fetch(
            format!("requesting {url}"),
            FetchErrorKind::HttpStatus { status, url },
        )
    }

    /// Create a manifest error with context
    pub fn manifest(context: impl Into<String>, source: ManifestErrorKind) -> Self {
        Self::Manifest {
            context: context.into(),
            source,
        }
    }

    /// Create a scrape error with context
    pub fn scrape(context: impl Into<String>, source: ScrapeErrorKind) -> Self {
        Self::Scrape {
            context: context.into(),
            source,
        }
    }

    /// Create a scrape error for a selector the HTML parser rejected
    pub fn invalid_selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::scrape(
            "compiling selector",
            ScrapeErrorKind::InvalidSelector {
                selector: selector.into(),
                reason: reason.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Render the error followed by its sources, separated by `: `.
    ///
    /// This is the form recorded in findings, where the whole cause must fit
    /// on one line.
    #[must_use]
    pub fn display_chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<serde_json::Error> for LinkCheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::manifest(
            "JSON deserialization",
            ManifestErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, so a
/// failure deep inside a stage reads as a path through the pipeline.
///
/// # Example
///
/// ```ignore
/// use landing_links::error::ErrorContext;
///
/// let manifest = Manifest::from_json(&page.body)
///     .with_context(|| format!("decoding manifest from {url}"))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<LinkCheckError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: LinkCheckError, new_ctx: &str) -> LinkCheckError {
    match err {
        LinkCheckError::Fetch {
            context: existing,
            source,
        } => LinkCheckError::Fetch {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LinkCheckError::Manifest {
            context: existing,
            source,
        } => LinkCheckError::Manifest {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LinkCheckError::Scrape {
            context: existing,
            source,
        } => LinkCheckError::Scrape {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LinkCheckError::Report {
            context: existing,
            source,
        } => LinkCheckError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LinkCheckError::Io {
            path,
            message,
            source,
        } => LinkCheckError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        LinkCheckError::Config(msg) => LinkCheckError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
