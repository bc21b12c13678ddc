//! Configuration management for the application.
//!
//! This module handles loading and validating the converter configuration
//! in TOML format with platform-specific directory resolution. Every field
//! has a default, so a missing file or a partial file is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_AUX_SUFFIX, DEFAULT_KEYBOARD_LAYOUTS, DEFAULT_RESOURCES_SUFFIX, DEFAULT_STYLE_SHEET,
};
use crate::export::OverlayStyle;
use crate::models::InsetTransform;

/// Output directory naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the source directory name for converted resources
    pub resources_suffix: String,
    /// Appended to the source directory name for overlays and keyboard JSON
    pub aux_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            resources_suffix: DEFAULT_RESOURCES_SUFFIX.to_string(),
            aux_suffix: DEFAULT_AUX_SUFFIX.to_string(),
        }
    }
}

/// Keyboard layout transcoding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Style sheet file name inside each theme directory
    pub style_sheet: String,
    /// Layout file names to transcode
    pub layouts: Vec<String>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            style_sheet: DEFAULT_STYLE_SHEET.to_string(),
            layouts: DEFAULT_KEYBOARD_LAYOUTS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/HamsterSkin/config.toml`
/// - macOS: `~/Library/Application Support/HamsterSkin/config.toml`
/// - Windows: `%APPDATA%\HamsterSkin\config.toml`
///
/// A file passed with `--config` takes precedence.
///
/// # Validation
///
/// - output suffixes must be non-empty and must not contain path separators
/// - overlay outline width must be 1 or 2, label scale at least 1
/// - the style sheet name and layout names must be non-empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory naming
    pub output: OutputConfig,
    /// Overlay colors and sizes
    pub overlay: OverlayStyle,
    /// Keyboard layout transcoding
    pub keyboard: KeyboardConfig,
    /// Inset computation policy
    pub insets: InsetTransform,
}

impl Config {
    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("HamsterSkin");

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// config file is used if present; otherwise defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::config_file_path() {
            Ok(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        for (name, suffix) in [
            ("resources_suffix", &self.output.resources_suffix),
            ("aux_suffix", &self.output.aux_suffix),
        ] {
            if suffix.is_empty() {
                anyhow::bail!("Output {name} must not be empty");
            }
            if suffix.contains(['/', '\\']) {
                anyhow::bail!("Output {name} '{suffix}' must not contain path separators");
            }
        }

        self.overlay.validate()?;

        if self.keyboard.style_sheet.trim().is_empty() {
            anyhow::bail!("Keyboard style_sheet must not be empty");
        }
        if self.keyboard.layouts.iter().any(|name| name.trim().is_empty()) {
            anyhow::bail!("Keyboard layouts must not contain empty names");
        }

        Ok(())
    }
}
