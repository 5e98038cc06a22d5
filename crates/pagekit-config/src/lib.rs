//! Configuration management for pagekit.
//!
//! Parses `pagekit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagekit.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override export output directory.
    pub output_dir: Option<PathBuf>,
    /// Override base path prefix.
    pub base_path: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw export configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    output_dir: Option<String>,
    base_path: Option<String>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug)]
pub struct ExportConfig {
    /// Directory rendered pages are written to.
    pub output_dir: PathBuf,
    /// Path prefix prepended to every route (empty for none).
    pub base_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            base_path: String::new(),
        }
    }
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

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagekit.toml` in current directory and
    /// parents, falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let mut config = Self::default();
        config.resolve_paths(&cwd);
        config
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.export_resolved = ExportConfig {
            output_dir: config_dir.join(self.export.output_dir.as_deref().unwrap_or("dist")),
            base_path: self.export.base_path.clone().unwrap_or_default(),
        };
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.export_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(base_path) = &settings.base_path {
            self.export_resolved.base_path.clone_from(base_path);
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export_resolved.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "export.output_dir cannot be empty".to_owned(),
            ));
        }

        let base_path = &self.export_resolved.base_path;
        if !base_path.is_empty() {
            if !base_path.starts_with('/') {
                return Err(ConfigError::Validation(
                    "export.base_path must start with '/'".to_owned(),
                ));
            }
            if base_path.ends_with('/') {
                return Err(ConfigError::Validation(
                    "export.base_path must not end with '/'".to_owned(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config_from_toml(toml: &str, base: &Path) -> Config {
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(base);
        config
    }

    #[test]
    fn test_default_config() {
        let config = config_from_toml("", Path::new("/project"));

        assert_eq!(
            config.export_resolved.output_dir,
            PathBuf::from("/project/dist")
        );
        assert_eq!(config.export_resolved.base_path, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_export_config() {
        let toml = r#"
[export]
output_dir = "public"
base_path = "/docs"
"#;
        let config = config_from_toml(toml, Path::new("/project"));

        assert_eq!(
            config.export_resolved.output_dir,
            PathBuf::from("/project/public")
        );
        assert_eq!(config.export_resolved.base_path, "/docs");
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let result = Config::load(Some(Path::new("/nonexistent/pagekit.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagekit.toml");
        std::fs::write(&path, "[export]\noutput_dir = \"out\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.export_resolved.output_dir, dir.path().join("out"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagekit.toml");
        std::fs::write(&path, "[export\n").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_apply_cli_settings_output_dir() {
        let mut config = config_from_toml("", Path::new("/project"));
        let settings = CliSettings {
            output_dir: Some(PathBuf::from("/custom/out")),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert_eq!(
            config.export_resolved.output_dir,
            PathBuf::from("/custom/out")
        );
        assert_eq!(config.export_resolved.base_path, ""); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_base_path() {
        let mut config = config_from_toml("", Path::new("/project"));
        let settings = CliSettings {
            base_path: Some("/docs".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.export_resolved.base_path, "/docs");
    }

    #[test]
    fn test_validate_base_path_without_leading_slash() {
        let mut config = config_from_toml("", Path::new("/project"));
        config.export_resolved.base_path = "docs".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("base_path"));
    }

    #[test]
    fn test_validate_base_path_with_trailing_slash() {
        let mut config = config_from_toml("", Path::new("/project"));
        config.export_resolved.base_path = "/docs/".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("must not end"));
    }

    #[test]
    fn test_validate_empty_output_dir() {
        let mut config = config_from_toml("", Path::new("/project"));
        config.export_resolved.output_dir = PathBuf::new();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("output_dir"));
    }
}
