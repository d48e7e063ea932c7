//! Tool configuration.
//!
//! Loads an optional `config.toml` controlling the rendered table and the
//! desktop notifications. All options have stock defaults; a config file is
//! never required, and a sparse file overrides only what it names:
//!
//! ```toml
//! [table]
//! image_width = 400          # Display width (px) for every rendered image
//! summary_label = "Screenshots"  # Label on the collapsible container
//!
//! [notify]
//! enabled = true             # Desktop notifications for the format command
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! Lookup order: an explicit `--config` path wins; otherwise
//! `$XDG_CONFIG_HOME/clipform/config.toml` (falling back to
//! `~/.config/clipform/config.toml`); otherwise stock defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Comparison-table rendering settings.
    pub table: TableConfig,
    /// Desktop notification settings.
    pub notify: NotifyConfig,
}

/// Comparison-table rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Display width in pixels applied to every rendered image.
    pub image_width: u32,
    /// Label shown on the collapsible `<details>` container.
    pub summary_label: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            summary_label: "Screenshots".to_string(),
        }
    }
}

/// Desktop notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifyConfig {
    /// Whether the `format` command posts desktop notifications.
    pub enabled: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.image_width == 0 {
            return Err(ConfigError::Validation(
                "table.image_width must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from an explicit path, or from the default location, or fall
/// back to stock defaults when no file exists.
///
/// An explicit path that does not exist is an error; a missing default-
/// location file is not.
pub fn load(explicit: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(ToolConfig::default()),
        },
    };
    let content = std::fs::read_to_string(&path)?;
    let config: ToolConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// `$XDG_CONFIG_HOME/clipform/config.toml`, falling back to
/// `~/.config/clipform/config.toml`. `None` when neither env var is set.
fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("clipform").join("config.toml"))
}

/// Stock `config.toml` with every option documented, printed by the
/// `gen-config` command.
pub fn stock_config_toml() -> String {
    let defaults = TableConfig::default();
    format!(
        r#"# clipform configuration
# All options are optional - defaults shown below

[table]
# Display width (px) applied to every image in the comparison table
image_width = {width}
# Label on the collapsible container wrapping the table
summary_label = "{label}"

[notify]
# Desktop notifications for the clipboard round-trip command
enabled = true
"#,
        width = defaults.image_width,
        label = defaults.summary_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ToolConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.table.image_width, 400);
        assert_eq!(config.table.summary_label, "Screenshots");
        assert!(config.notify.enabled);
    }

    #[test]
    fn sparse_file_overrides_only_named_values() {
        let config: ToolConfig = toml::from_str("[table]\nimage_width = 250\n").unwrap();
        assert_eq!(config.table.image_width, 250);
        assert_eq!(config.table.summary_label, "Screenshots");
        assert!(config.notify.enabled);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<ToolConfig, _> = toml::from_str("[table]\nimage_widht = 250\n");
        assert!(result.is_err());
    }

    #[test]
    fn zero_width_fails_validation() {
        let config: ToolConfig = toml::from_str("[table]\nimage_width = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn stock_config_parses_back() {
        let config: ToolConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert!(config.validate().is_ok());
    }
}
