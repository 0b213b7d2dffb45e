use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inkstroke::config::Config;
use inkstroke::draw::Point;
use inkstroke::input::{EditorAction, EditorSettings, StrokeEditor};
use inkstroke::stroke_file::StrokeFile;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "inkstroke")]
#[command(version, about = "Freehand stroke smoothing and shape recognition")]
struct Cli {
    /// Use this config file instead of ~/.config/inkstroke/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a recorded stroke and print the idealized shape
    Recognize {
        /// JSON stroke recording
        file: PathBuf,
    },
    /// Replay a recorded stroke and print the smoothed path
    Smooth {
        /// JSON stroke recording
        file: PathBuf,

        /// Override the configured smoothness (0.0 - 1.0)
        #[arg(long, short = 's', value_name = "S")]
        smoothness: Option<f64>,
    },
}

#[derive(Serialize)]
struct RecognizeOutput {
    shape: Option<&'static str>,
    points: Vec<Point>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Recognize { file } => {
            let stroke = read_stroke(&file)?;
            let editor = replay(&config, &stroke, None);
            let Some(path) = editor.paths().last() else {
                anyhow::bail!("Stroke in {} produced no path", file.display());
            };
            let thickness = stroke
                .thickness
                .or_else(|| path.mean_thickness())
                .unwrap_or(config.drawing.stroke_width);

            let output = match inkstroke::recognize(&path.points, thickness) {
                Some(shape) => {
                    log::info!("Recognized {}", shape.kind.as_str());
                    RecognizeOutput {
                        shape: Some(shape.kind.as_str()),
                        points: shape.points,
                    }
                }
                None => {
                    log::info!("No shape recognized; stroke stays freehand");
                    RecognizeOutput {
                        shape: None,
                        points: path.points.clone(),
                    }
                }
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Smooth { file, smoothness } => {
            let stroke = read_stroke(&file)?;
            let editor = replay(&config, &stroke, smoothness);
            let Some(path) = editor.paths().last() else {
                anyhow::bail!("Stroke in {} produced no path", file.display());
            };
            println!("{}", serde_json::to_string_pretty(path)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn read_stroke(file: &Path) -> Result<StrokeFile> {
    StrokeFile::load(file).with_context(|| format!("Failed to load {}", file.display()))
}

/// Feeds the recorded samples through a fresh editor as pointer actions.
fn replay(config: &Config, stroke: &StrokeFile, smoothness: Option<f64>) -> StrokeEditor {
    let mut settings = EditorSettings::from_config(config);
    settings.auto_snap = false;
    if let Some(width) = stroke.thickness {
        settings.stroke_width = width;
    }
    if let Some(smoothness) = smoothness {
        settings.smoothness = smoothness;
    }

    let mut editor = StrokeEditor::new(settings);
    for (i, sample) in stroke.points.iter().enumerate() {
        let (x, y, pressure) = (sample.x(), sample.y(), sample.pressure());
        let action = if i == 0 {
            EditorAction::PointerDown { x, y, pressure }
        } else {
            EditorAction::PointerMove { x, y, pressure }
        };
        editor.apply(action);
    }
    editor.apply(EditorAction::PointerUp);
    editor
}
