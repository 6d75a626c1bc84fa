//! Configuration management for mdsplice.
//!
//! Parses `mdsplice.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [scan]
//! root = "docs"
//! extension = "md"
//!
//! [documentation]
//! path = "tools/directives.md"
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the directory to walk.
    pub root: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdsplice.toml";

/// Default markdown extension.
const DEFAULT_EXTENSION: &str = "md";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan configuration (paths are relative strings from TOML).
    scan: ScanConfigRaw,
    /// Documentation asset configuration.
    documentation: DocumentationConfigRaw,

    /// Resolved scan configuration (set after loading).
    #[serde(skip)]
    pub scan_resolved: ScanConfig,
    /// Resolved documentation asset override (set after loading).
    #[serde(skip)]
    pub documentation_path: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw scan configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ScanConfigRaw {
    root: Option<String>,
    extension: Option<String>,
}

/// Resolved scan configuration.
#[derive(Debug, Default)]
pub struct ScanConfig {
    /// Directory to walk for markdown files.
    pub root: PathBuf,
    /// File extension to process, without the leading dot.
    pub extension: String,
}

/// Raw documentation configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocumentationConfigRaw {
    path: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdsplice.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Self::load_in(&cwd, config_path, cli_settings)
    }

    /// Load configuration as if the current directory were `cwd`.
    fn load_in(
        cwd: &Path,
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config(cwd) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_base(cwd)
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root) = &settings.root {
            self.scan_resolved.root.clone_from(root);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            scan: ScanConfigRaw::default(),
            documentation: DocumentationConfigRaw::default(),
            scan_resolved: ScanConfig {
                root: base.to_path_buf(),
                extension: DEFAULT_EXTENSION.to_owned(),
            },
            documentation_path: None,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extension = &self.scan_resolved.extension;
        require_non_empty(extension, "scan.extension")?;
        if extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "scan.extension must not start with '.'".to_owned(),
            ));
        }

        if let Some(path) = &self.documentation.path {
            require_non_empty(path, "documentation.path")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.scan_resolved = ScanConfig {
            root: self
                .scan
                .root
                .as_deref()
                .map_or_else(|| config_dir.to_path_buf(), |root| config_dir.join(root)),
            extension: self
                .scan
                .extension
                .clone()
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_owned()),
        };

        self.documentation_path = self
            .documentation
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| config_dir.join(p));
    }
}
