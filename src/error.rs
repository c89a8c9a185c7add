use std::io;
use std::path::PathBuf;

/// Errors surfaced while configuring or hosting the playground.
///
/// Everything inside the frame loop is infallible; these only occur at
/// startup or when the GPU surface misbehaves.
#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    #[error("shake speed must be an integer, got '{input}'")]
    InvalidSpeed { input: String },

    #[error("failed to read the shake speed from standard input: {0}")]
    Prompt(#[source] io::Error),

    #[error("missing value for command-line flag '{0}'")]
    MissingArgument(String),

    #[error("failed to read config file '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to load image '{path}': {source}")]
    LoadImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image is {width}x{height}, larger than the GPU limit of {max} pixels per side")]
    TextureTooLarge { width: u32, height: u32, max: u32 },

    #[error("failed to create rendering surface: {0}")]
    Surface(String),

    #[error("no suitable GPU adapter found: {0}")]
    Adapter(String),

    #[error("failed to create GPU device: {0}")]
    Device(String),

    #[error("window event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
