//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::ValidatorConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".landing-links.yaml",
    ".landing-links.yml",
    "landing-links.yaml",
    "landing-links.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/landing-links/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join("landing-links"))
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load a `ValidatorConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<ValidatorConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: ValidatorConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (ValidatorConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (ValidatorConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (ValidatorConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Values supplied on the command line; `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub manifest_url: Option<String>,
    pub landing_page_url: Option<String>,
    pub site_origin: Option<String>,
    pub container_selector: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
}

impl ValidatorConfig {
    /// Layer CLI overrides on top of this configuration.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.manifest_url {
            self.sources.manifest_url = url;
        }
        if let Some(url) = overrides.landing_page_url {
            self.sources.landing_page_url = url;
        }
        if let Some(origin) = overrides.site_origin {
            self.sources.site_origin = origin;
        }
        if let Some(selector) = overrides.container_selector {
            self.scraping.container_selector = selector;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.http.timeout_secs = secs;
        }
        if let Some(dir) = overrides.output_dir {
            self.output.markdown_report = dir.join(file_name_of(&self.output.markdown_report));
            self.output.json_report = dir.join(file_name_of(&self.output.json_report));
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
        if overrides.quiet {
            self.behavior.quiet = true;
        }
    }
}

fn file_name_of(path: &Path) -> PathBuf {
    path.file_name().map_or_else(|| path.to_path_buf(), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".landing-links.yaml");
        std::fs::write(
            &path,
            "sources:\n  landing_page_url: http://localhost:3000/\nscraping:\n  container_selector: li.card\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.sources.landing_page_url, "http://localhost:3000/");
        assert_eq!(config.scraping.container_selector, "li.card");
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_config_file(Path::new("/nonexistent/landing-links.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("landing-links.yaml");
        std::fs::write(&path, "http: [not, a, map").unwrap();

        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(config, ValidatorConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_find_config_in_dir_prefers_hidden_yaml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("landing-links.yml"), "").unwrap();
        std::fs::write(dir.path().join(".landing-links.yaml"), "").unwrap();
        let found = find_config_in_dir(dir.path()).unwrap();
        assert!(found.ends_with(".landing-links.yaml"));
    }

    #[test]
    fn test_overrides_only_touch_given_fields() {
        let mut config = ValidatorConfig::default();
        config.apply(ConfigOverrides {
            landing_page_url: Some("http://127.0.0.1/".to_string()),
            output_dir: Some(PathBuf::from("reports")),
            quiet: true,
            ..ConfigOverrides::default()
        });

        assert_eq!(config.sources.landing_page_url, "http://127.0.0.1/");
        assert_eq!(
            config.sources.manifest_url,
            ValidatorConfig::default().sources.manifest_url
        );
        assert_eq!(
            config.output.markdown_report,
            PathBuf::from("reports/validation_report.md")
        );
        assert!(config.behavior.quiet);
        assert!(!config.output.no_color);
    }
}
