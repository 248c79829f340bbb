//! landing-links: GroupDocs landing page link validator
//!
//! Checks that every product in the version manifest is linked from the
//! products landing page and from its own family page.

use anyhow::Result;
use clap::Parser;
use landing_links::{
    cli,
    config::{ConfigOverrides, load_or_default},
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "landing-links")]
#[command(version)]
#[command(about = "Validate product links on the GroupDocs landing page", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No errors recorded
    1  Errors recorded, or the manifest or landing page could not be loaded

OUTPUT:
    validation_report.md  Markdown table of every discovered link with its live status
    product_links.json    Link index keyed by manifest product and platform")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress progress output and the console summary
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, env = "LANDING_LINKS_CONFIG")]
    config: Option<PathBuf>,

    /// URL of the product version manifest
    #[arg(long, env = "LANDING_LINKS_MANIFEST_URL")]
    manifest_url: Option<String>,

    /// URL of the products landing page
    #[arg(long, env = "LANDING_LINKS_LANDING_PAGE_URL")]
    landing_page_url: Option<String>,

    /// Origin that relative links are resolved against
    #[arg(long, env = "LANDING_LINKS_SITE_ORIGIN")]
    site_origin: Option<String>,

    /// CSS selector of product containers on the landing page
    #[arg(long, env = "LANDING_LINKS_CONTAINER_SELECTOR")]
    container_selector: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "LANDING_LINKS_TIMEOUT")]
    timeout: Option<u64>,

    /// Directory the reports are written to
    #[arg(short = 'O', long, env = "LANDING_LINKS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    config.apply(ConfigOverrides {
        manifest_url: cli.manifest_url,
        landing_page_url: cli.landing_page_url,
        site_origin: cli.site_origin,
        container_selector: cli.container_selector,
        timeout_secs: cli.timeout,
        output_dir: cli.output_dir,
        no_color: cli.no_color,
        quiet: cli.quiet,
    });

    let exit_code = cli::run_validate(&config)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
