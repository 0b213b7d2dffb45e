//! JSON stroke recordings read by the diagnostic binary.
//!
//! A recording is `{"points": [...], "thickness": 3.0}` where each point is
//! either `[x, y]` or `{"x": .., "y": .., "pressure": ..}`. `thickness` is
//! optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a stroke recording.
#[derive(Debug, Error)]
pub enum StrokeFileError {
    #[error("Failed to read stroke file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid stroke JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stroke file contains no points")]
    Empty,
}

/// One recorded pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    /// Bare `[x, y]` pair (pressure 1.0)
    Pair([f64; 2]),
    /// Object form with optional pressure
    Full {
        x: f64,
        y: f64,
        #[serde(default = "default_pressure")]
        pressure: f64,
    },
}

impl Sample {
    pub fn x(&self) -> f64 {
        match self {
            Sample::Pair([x, _]) => *x,
            Sample::Full { x, .. } => *x,
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Sample::Pair([_, y]) => *y,
            Sample::Full { y, .. } => *y,
        }
    }

    pub fn pressure(&self) -> f64 {
        match self {
            Sample::Pair(_) => default_pressure(),
            Sample::Full { pressure, .. } => *pressure,
        }
    }
}

fn default_pressure() -> f64 {
    1.0
}

/// A recorded stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeFile {
    pub points: Vec<Sample>,

    /// Stroke width override; falls back to the configured width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

impl StrokeFile {
    /// Parses a recording from JSON text.
    pub fn parse(text: &str) -> Result<Self, StrokeFileError> {
        let file: StrokeFile = serde_json::from_str(text)?;
        if file.points.is_empty() {
            return Err(StrokeFileError::Empty);
        }
        Ok(file)
    }

    /// Reads and parses a recording from disk.
    pub fn load(path: &Path) -> Result<Self, StrokeFileError> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Read stroke file {}", path.display());
        Self::parse(&text)
    }
}
