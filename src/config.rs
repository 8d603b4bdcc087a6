//! Render configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML config
//! file, then command-line overrides. Each layer is a [`PartialConfig`]
//! whose set fields replace the ones below it.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::camera::{Camera, DEFAULT_FOV};
use crate::error::{TraceError, TraceResult};
use crate::material::ShadingOptions;
use crate::scene::Scene;

/// Fully resolved settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Field of view in degrees
    pub fov: f32,
    /// Output image path; the extension selects the format
    pub output: PathBuf,
    /// Shadow-ray offset along the surface normal
    pub shadow_bias: f32,
    /// Scale diffuse lighting by light intensity
    pub use_light_intensity: bool,
    /// TOML scene file, or `None` for the built-in reference scene
    pub scene: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            fov: DEFAULT_FOV,
            output: PathBuf::from("Picture.ppm"),
            shadow_bias: ShadingOptions::DEFAULT_SHADOW_BIAS,
            use_light_intensity: false,
            scene: None,
        }
    }
}

/// One configuration layer. Unset fields leave the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fov: Option<f32>,
    pub output: Option<PathBuf>,
    pub shadow_bias: Option<f32>,
    pub use_light_intensity: Option<bool>,
    pub scene: Option<PathBuf>,
}

impl PartialConfig {
    /// Read a layer from a TOML config file.
    ///
    /// A relative `scene` path is resolved against the config file's
    /// directory.
    pub fn from_file(path: &Path) -> TraceResult<Self> {
        let text = fs::read_to_string(path)?;
        let mut layer: Self = toml::from_str(&text)?;

        if let (Some(scene), Some(dir)) = (layer.scene.as_mut(), path.parent()) {
            if scene.is_relative() {
                *scene = dir.join(&*scene);
            }
        }

        Ok(layer)
    }
}

impl RenderConfig {
    /// Apply a layer on top of the current values.
    pub fn merge(&mut self, layer: PartialConfig) {
        debug!("Merging configuration layer {:?}", layer);

        if let Some(width) = layer.width {
            self.width = width;
        }
        if let Some(height) = layer.height {
            self.height = height;
        }
        if let Some(fov) = layer.fov {
            self.fov = fov;
        }
        if let Some(output) = layer.output {
            self.output = output;
        }
        if let Some(shadow_bias) = layer.shadow_bias {
            self.shadow_bias = shadow_bias;
        }
        if let Some(use_light_intensity) = layer.use_light_intensity {
            self.use_light_intensity = use_light_intensity;
        }
        if layer.scene.is_some() {
            self.scene = layer.scene;
        }
    }

    /// Check the values the camera and shader rely on.
    pub fn validate(&self) -> TraceResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TraceError::InvalidConfig(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(TraceError::InvalidConfig(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov
            )));
        }
        if !(self.shadow_bias.is_finite() && self.shadow_bias >= 0.0) {
            return Err(TraceError::InvalidConfig(format!(
                "shadow bias must be finite and non-negative, got {}",
                self.shadow_bias
            )));
        }
        Ok(())
    }

    /// Camera matching the configured resolution and field of view.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov)
    }

    pub fn shading_options(&self) -> ShadingOptions {
        ShadingOptions {
            shadow_bias: self.shadow_bias,
            use_light_intensity: self.use_light_intensity,
        }
    }

    /// The configured scene file, or the reference scene when none is set.
    pub fn load_scene(&self) -> TraceResult<Scene> {
        match &self.scene {
            Some(path) => Scene::from_file(path),
            None => Ok(Scene::reference()),
        }
    }
}
