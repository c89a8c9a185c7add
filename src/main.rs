use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use camera_playground::config::{CliArgs, PlaygroundConfig, prompt_speed};
use camera_playground::engine;
use camera_playground::renderer::texture::{load_image, placeholder_image};

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = CliArgs::parse().context("Invalid command line")?;
    let config = PlaygroundConfig::resolve(&cli).context("Failed to load configuration")?;

    let speed = match config.shake.speed {
        Some(speed) => speed,
        None => prompt_speed(io::stdin().lock(), io::stdout())
            .context("Could not read the shake speed")?,
    };

    let image = match &config.image.path {
        Some(path) => load_image(path)?,
        None => placeholder_image(config.image.placeholder_size),
    };

    info!("Starting camera playground ({}x{})", config.window.width, config.window.height);
    engine::run(config, speed, image).context("Playground exited with an error")?;
    Ok(())
}
