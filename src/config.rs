//! Preview configuration.
//!
//! Everything works without a config file. An optional `slice-preview.toml`
//! in the config directory overrides the stock defaults:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! default_lang = "pl"         # Language used when `render` gets none
//!
//! [preview]
//! mobile_width = 375          # Width (px) of the mobile frame
//! desktop_width = 1440        # Minimum width (px) of the desktop frame
//! media_min_width = 1440      # min-width (px) that gates desktop overrides
//!
//! [variables]
//! "--primary" = "#1D9BF0"     # Override or add design variables
//! ```
//!
//! Config files are sparse: stock defaults are serialized to a TOML table, the
//! user file is merged on top key by key, and the result is deserialized and
//! validated. Unknown keys are rejected to catch typos early.

use crate::i18n::Lang;
use crate::render::DESKTOP_MIN_WIDTH;
use crate::variables::DesignVariables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "slice-preview.toml";

/// Characters that would end a declaration, a rule or the `<style>` element
/// a variable value is written into.
const CSS_BREAKING_CHARS: [char; 5] = ['<', '>', '{', '}', ';'];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `slice-preview.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language used when none is given on the command line.
    pub default_lang: Lang,
    /// Preview frame and media-query widths.
    pub preview: PreviewConfig,
    /// Design variable overrides, keyed by `--name`.
    pub variables: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_lang: Lang::Pl,
            preview: PreviewConfig::default(),
            variables: BTreeMap::new(),
        }
    }
}

/// Preview frame settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Width (px) of the mobile preview frame.
    pub mobile_width: u32,
    /// Minimum width (px) of the desktop preview frame.
    pub desktop_width: u32,
    /// Viewport width (px) from which desktop overrides apply.
    pub media_min_width: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            mobile_width: 375,
            desktop_width: 1440,
            media_min_width: DESKTOP_MIN_WIDTH,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let preview = &self.preview;
        if preview.mobile_width == 0 || preview.desktop_width == 0 || preview.media_min_width == 0 {
            return Err(ConfigError::Validation(
                "preview widths must be non-zero".into(),
            ));
        }
        if preview.mobile_width >= preview.desktop_width {
            return Err(ConfigError::Validation(
                "preview.mobile_width must be smaller than preview.desktop_width".into(),
            ));
        }
        if let Some(name) = self.variables.keys().find(|name| !name.starts_with("--")) {
            return Err(ConfigError::Validation(format!(
                "variable '{name}' must start with '--'"
            )));
        }
        if let Some((name, _)) = self
            .variables
            .iter()
            .find(|(_, value)| value.contains(CSS_BREAKING_CHARS))
        {
            return Err(ConfigError::Validation(format!(
                "variable '{name}' must not contain any of < > {{ }} ;"
            )));
        }
        Ok(())
    }

    /// Stock design variables with this config's overrides applied.
    pub fn design_variables(&self) -> DesignVariables {
        DesignVariables::with_overrides(
            self.variables
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `slice-preview.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given directory, falling back to stock defaults.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `slice-preview.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# slice-preview configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Language used when `render` is called without one: "pl" or "en".
default_lang = "pl"

# ---------------------------------------------------------------------------
# Preview frames
# ---------------------------------------------------------------------------
[preview]
# Width (px) of the mobile preview frame.
mobile_width = 375

# Minimum width (px) of the desktop preview frame.
desktop_width = 1440

# Viewport width (px) from which desktop overrides apply.
media_min_width = 1440

# ---------------------------------------------------------------------------
# Design variables
# ---------------------------------------------------------------------------
# Override or add variables used to resolve var(--name) values.
# Stock values come from the site's colors.css.
[variables]
# "--primary" = "#1D9BF0"
# "--bg" = "#FFFFFF"
"##
}
