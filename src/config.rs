//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_ENV, DEFAULT_COLS, DEFAULT_EXPORT_FILE_NAME, DEFAULT_ROWS,
    DEFAULT_TOAST_DURATION, MAX_GRID_DIMENSION,
};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Pixel grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (1..=64)
    pub rows: u8,
    /// Number of columns (1..=64)
    pub cols: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Where and how sample sets are exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to
    pub output_dir: PathBuf,
    /// Exported file name
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: Self::default_output_dir(),
            file_name: default_export_file_name(),
        }
    }
}

impl ExportConfig {
    /// Gets the default export directory: the user's download directory,
    /// like a browser download, or the working directory when there is none.
    fn default_output_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// How long the save acknowledgment stays visible, in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION.as_millis() as u64
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl UiConfig {
    /// Toast duration as a `Duration`.
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PixelGrid/config.toml`
/// - macOS: `~/Library/Application Support/PixelGrid/config.toml`
/// - Windows: `%APPDATA%\PixelGrid\config.toml`
///
/// `PIXELGRID_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - grid rows and cols must be within 1..=64
/// - export file name must be a bare `.csv` file name
/// - toast duration must be positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Grid dimensions
    #[serde(default)]
    pub grid: GridConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$PIXELGRID_CONFIG_DIR` if set
    /// - Linux: `~/.config/PixelGrid/`
    /// - macOS: `~/Library/Application Support/PixelGrid/`
    /// - Windows: `%APPDATA%\PixelGrid\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("PixelGrid");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using temp file + rename.
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = self.to_toml()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Serializes the configuration to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("rows", self.grid.rows), ("cols", self.grid.cols)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                anyhow::bail!(
                    "Grid {name} must be between 1 and {MAX_GRID_DIMENSION}, got {value}"
                );
            }
        }

        let file_name = &self.export.file_name;
        let is_bare_name = !file_name.contains(|c: char| c == '/' || c == '\\');
        if file_name.is_empty() || !is_bare_name || !file_name.ends_with(".csv") {
            anyhow::bail!(
                "Export file name must be a plain file name ending in .csv, got '{file_name}'"
            );
        }

        if self.ui.toast_duration_ms == 0 {
            anyhow::bail!("Toast duration must be greater than zero");
        }

        Ok(())
    }
}
