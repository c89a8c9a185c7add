pub mod camera;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod input;
pub mod playground;
pub mod renderer;
pub mod sprite;

pub use error::{PlaygroundError, Result};
