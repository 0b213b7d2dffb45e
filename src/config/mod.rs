//! Configuration file support for inkstroke.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkstroke/config.toml`. Settings include pen defaults,
//! smoothing, eraser size, recognition behavior, history depth and the palette.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{
    CanvasConfig, DrawingConfig, EraserConfig, HistoryConfig, PaletteConfig, RecognitionConfig,
};

use crate::draw::{Color, DEFAULT_PALETTE};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// stroke_width = 3.0
/// pressure_sensitive = true
/// smoothness = 0.1
///
/// [eraser]
/// radius = 10.0
///
/// [recognition]
/// auto_snap = false
///
/// [history]
/// max_snapshots = 200
///
/// [palette]
/// colors = ["black", "red", [0, 128, 255]]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen defaults and smoothing
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Eraser tool settings
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Shape recognition behavior
    #[serde(default)]
    pub recognition: RecognitionConfig,

    /// Undo/redo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// Color palette (index 0 is primary)
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Canvas display settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 0.5 - 50.0
    /// - `smoothness`: 0.0 - 1.0
    /// - `eraser.radius`: 1.0 - 200.0
    /// - `palette.colors`: at least one entry
    pub fn validate_and_clamp(&mut self) {
        // Stroke width: 0.5 - 50.0
        if !(0.5..=50.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-50.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = clamp_or(self.drawing.stroke_width, 0.5, 50.0, 3.0);
        }

        // Smoothness: 0.0 - 1.0
        let (min_s, max_s) = crate::smooth::SMOOTHNESS_RANGE;
        if !(min_s..=max_s).contains(&self.drawing.smoothness) {
            log::warn!(
                "Invalid smoothness {:.3}, clamping to {:.1}-{:.1} range",
                self.drawing.smoothness,
                min_s,
                max_s
            );
            self.drawing.smoothness = clamp_or(
                self.drawing.smoothness,
                min_s,
                max_s,
                crate::smooth::DEFAULT_SMOOTHNESS,
            );
        }

        // Eraser radius: 1.0 - 200.0
        if !(1.0..=200.0).contains(&self.eraser.radius) {
            log::warn!(
                "Invalid eraser radius {:.1}, clamping to 1.0-200.0 range",
                self.eraser.radius
            );
            self.eraser.radius = clamp_or(self.eraser.radius, 1.0, 200.0, 10.0);
        }

        if self.palette.colors.is_empty() {
            log::warn!("Empty palette, falling back to the default palette");
            self.palette.colors = types::default_palette();
        }
    }

    /// Resolved palette colors; index 0 is primary. Never empty.
    pub fn palette_colors(&self) -> Vec<Color> {
        let colors: Vec<Color> = self.palette.colors.iter().map(ColorSpec::to_color).collect();
        if colors.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            colors
        }
    }

    /// Initial pen color: `drawing.default_color`, or the primary palette color.
    pub fn default_color(&self) -> Color {
        match &self.drawing.default_color {
            Some(spec) => spec.to_color(),
            None => self.palette_colors()[0],
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkstroke/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkstroke");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `config_path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
