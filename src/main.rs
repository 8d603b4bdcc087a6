use anyhow::Context;
use clap::Parser;
use log::info;

use spheretrace::output::save_image;
use spheretrace::{PartialConfig, RenderConfig};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Defaults, then the config file if one was given, then command-line flags.
fn resolve_config(args: &Args) -> anyhow::Result<RenderConfig> {
    let mut config = RenderConfig::default();

    if let Some(path) = &args.config {
        let layer = PartialConfig::from_file(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        config.merge(layer);
    }
    config.merge(args.overrides());
    config.validate()?;

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Spheretrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let config = resolve_config(&args)?;
    info!("Image resolution: {}x{}, field of view: {}", config.width, config.height, config.fov);

    match &config.scene {
        Some(path) => info!("Loading scene from {}", path.display()),
        None => info!("Using built-in reference scene"),
    }
    let scene = config.load_scene().context("failed to load scene")?;

    let camera = config.camera();
    let image = camera.render(&scene, &config.shading_options());

    save_image(&image, &config.output)
        .with_context(|| format!("failed to save image to {}", config.output.display()))?;

    Ok(())
}
