//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen used for new strokes and how freehand paths are smoothed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red. Falls back to the primary palette color when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_color: Option<ColorSpec>,

    /// Stroke width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Scale stroke width by pointer pressure
    #[serde(default)]
    pub pressure_sensitive: bool,

    /// Curve smoothness coefficient (valid range: 0.0 - 1.0)
    /// 0.0 draws sharp polylines; larger values round corners more
    #[serde(default = "default_smoothness")]
    pub smoothness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: None,
            stroke_width: default_stroke_width(),
            pressure_sensitive: false,
            smoothness: default_smoothness(),
        }
    }
}

/// Eraser tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EraserConfig {
    /// Hit radius in pixels around the pointer (valid range: 1.0 - 200.0)
    #[serde(default = "default_eraser_radius")]
    pub radius: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            radius: default_eraser_radius(),
        }
    }
}

/// Shape recognition settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RecognitionConfig {
    /// Replace finished pen strokes with recognized shapes automatically
    #[serde(default)]
    pub auto_snap: bool,
}

/// Undo/redo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept (0 = unlimited)
    #[serde(default)]
    pub max_snapshots: usize,
}

/// Color palette; index 0 is the primary color.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    #[serde(default = "default_palette")]
    pub colors: Vec<ColorSpec>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette(),
        }
    }
}

/// Canvas display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Start with the background grid visible
    #[serde(default)]
    pub grid_enabled: bool,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_width() -> f64 {
    3.0
}

fn default_smoothness() -> f64 {
    crate::smooth::DEFAULT_SMOOTHNESS
}

fn default_eraser_radius() -> f64 {
    10.0
}

pub(crate) fn default_palette() -> Vec<ColorSpec> {
    ["black", "red", "blue", "green", "orange"]
        .into_iter()
        .map(|name| ColorSpec::Name(name.to_string()))
        .collect()
}
