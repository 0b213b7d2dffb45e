//! RGBA color type and the default palette constants.

use serde::{Deserialize, Serialize};

/// RGBA color, every component in 0.0 - 1.0.
///
/// Paths carry one color each; palettes are ordered lists of these with the
/// primary color at index 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Opacity (1.0 = opaque)
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 0.0 - 1.0 components, usable in constants.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from 0-255 RGB components (config `[r, g, b]` form).
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::opaque(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

// Named colors accepted in the config file.
pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);
pub const YELLOW: Color = Color::opaque(1.0, 1.0, 0.0);
pub const ORANGE: Color = Color::opaque(1.0, 0.5, 0.0);
pub const PINK: Color = Color::opaque(1.0, 0.0, 1.0);
pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);

/// Palette used when the configuration does not provide one. Index 0 is primary.
pub const DEFAULT_PALETTE: [Color; 5] = [BLACK, RED, BLUE, GREEN, ORANGE];
