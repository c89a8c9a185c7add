//! Startup configuration: an optional TOML file, command-line overrides and
//! the interactive shake-speed prompt.
//!
//! ```toml
//! [window]
//! title = "Camera Playground"
//! width = 640
//! height = 480
//!
//! [image]
//! path = "badlogic.jpg"
//!
//! [shake]
//! duration = 500
//! intensity = 10.0
//! speed = 90
//! style = "alternating"   # or "compounding"
//!
//! [controls]
//! modifier_latch = "per_gesture"   # or "sticky"
//! ```

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::effect::ShakeStyle;
use crate::error::{PlaygroundError, Result};
use crate::input::ModifierLatch;

// ── WindowSettings ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Viewport width in pixels; also bounds drag panning.
    pub width: u32,
    /// Viewport height in pixels; also bounds drag panning.
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Camera Playground".into(),
            width: 640,
            height: 480,
        }
    }
}

// ── ImageSettings ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// PNG or JPEG to display. A generated placeholder is used when absent.
    pub path: Option<PathBuf>,
    /// Size of the generated placeholder.
    pub placeholder_size: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self { path: None, placeholder_size: 256 }
    }
}

// ── ShakeSettings ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShakeSettings {
    /// Effect length in frames.
    pub duration: i32,
    pub intensity: f32,
    /// 0–100. When unset the user is prompted on standard input.
    pub speed: Option<i32>,
    pub style: ShakeStyle,
}

impl Default for ShakeSettings {
    fn default() -> Self {
        Self {
            duration: 500,
            intensity: 10.0,
            speed: None,
            style: ShakeStyle::default(),
        }
    }
}

// ── ControlSettings ───────────────────────────────────────────────────────────

/// Per-frame step sizes for held keys and per-press steps for image edits.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub pan_step: f32,
    pub zoom_step: f32,
    /// Degrees per frame.
    pub rotate_step: f32,
    pub image_step: f32,
    /// Degrees per press.
    pub image_rotate_step: f32,
    pub modifier_latch: ModifierLatch,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            pan_step: 1.0,
            zoom_step: 0.1,
            rotate_step: 1.0,
            image_step: 5.0,
            image_rotate_step: 2.0,
            modifier_latch: ModifierLatch::default(),
        }
    }
}

// ── PlaygroundConfig ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub window: WindowSettings,
    pub image: ImageSettings,
    pub shake: ShakeSettings,
    pub controls: ControlSettings,
}

impl PlaygroundConfig {
    /// Parse a TOML document. `path` is only used for error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| PlaygroundError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PlaygroundError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load the file named on the command line (if any) and apply the
    /// remaining flags on top of it.
    pub fn resolve(cli: &CliArgs) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(speed) = cli.speed {
            config.shake.speed = Some(speed);
        }
        if let Some(path) = &cli.image {
            config.image.path = Some(path.clone());
        }
        Ok(config)
    }
}

// ── Command line ──────────────────────────────────────────────────────────────

/// Command-line arguments parsed at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliArgs {
    /// `--config <path>`: TOML config file.
    pub config: Option<PathBuf>,
    /// `--speed <n>`: skip the interactive prompt.
    pub speed: Option<i32>,
    /// `--image <path>`: image to display.
    pub image: Option<PathBuf>,
}

impl CliArgs {
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments (program name already stripped). Unknown flags are
    /// logged and ignored.
    pub fn parse_from<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => cli.config = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--image" => cli.image = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--speed" => cli.speed = Some(parse_speed(&value_for(&arg, args.next())?)?),
                other => warn!("CLI: Unknown argument '{}'", other),
            }
        }

        Ok(cli)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| PlaygroundError::MissingArgument(flag.to_string()))
}

// ── Speed prompt ──────────────────────────────────────────────────────────────

/// Parse the shake speed. Only integer syntax is checked; range handling is
/// left to [`crate::effect::CameraShake::set_speed`].
pub fn parse_speed(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| PlaygroundError::InvalidSpeed { input: trimmed.to_string() })
}

/// Ask for the shake speed and read one line.
pub fn prompt_speed<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<i32> {
    write!(writer, "What Speed?(0-100) ").map_err(PlaygroundError::Prompt)?;
    writer.flush().map_err(PlaygroundError::Prompt)?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(PlaygroundError::Prompt)?;
    parse_speed(&line)
}
