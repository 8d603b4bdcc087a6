use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use spheretrace::PartialConfig;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "spheretrace")]
#[command(about = "Render a scene of spheres and point lights to an image")]
pub struct Args {
    /// TOML file with render settings; flags given here override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// TOML scene file (defaults to the built-in reference scene)
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, help = "Image width in pixels [default: 200]")]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, help = "Image height in pixels [default: 200]")]
    pub height: Option<u32>,

    /// Field of view in degrees
    #[arg(long, help = "Field of view in degrees [default: 30]")]
    pub fov: Option<f32>,

    /// Output file path (.ppm ASCII, .png 8-bit, .exr HDR linear)
    #[arg(short, long, help = "Output file path: .ppm, .png or .exr [default: Picture.ppm]")]
    pub output: Option<PathBuf>,

    /// Shadow ray offset along the surface normal (1 reproduces the original images)
    #[arg(long, help = "Shadow ray offset along the surface normal [default: 0.0001]")]
    pub shadow_bias: Option<f32>,

    /// Scale diffuse lighting by each light's intensity
    #[arg(long, help = "Scale diffuse lighting by each light's intensity")]
    pub light_intensity: bool,
}

impl Args {
    /// Settings given on the command line, as the topmost config layer.
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            width: self.width,
            height: self.height,
            fov: self.fov,
            output: self.output.clone(),
            shadow_bias: self.shadow_bias,
            use_light_intensity: self.light_intensity.then_some(true),
            scene: self.scene.clone(),
        }
    }
}
