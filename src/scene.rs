//! Scene description: spheres, lights and a background color.
//!
//! A [`Scene`] is built once, either from the built-in reference layout or
//! from a TOML file, and is read-only while rendering.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::TraceResult;
use crate::light::Light;
use crate::material::Material;
use crate::sphere::Sphere;
use crate::vector::{vec3, Color, Vec3};

/// Everything the tracer needs to know about the world.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Primitives in scan order; earlier spheres win exact distance ties.
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    /// Color returned for rays that hit nothing.
    pub background: Color,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, background: Color) -> Self {
        Self {
            spheres,
            lights,
            background,
        }
    }

    /// Floor, three colored spheres and one white light over a black
    /// background.
    pub fn reference() -> Self {
        let spheres = vec![
            // Floor
            Sphere::new(
                Vec3::new(0.0, -10004.0, -20.0),
                10000.0,
                Color::new(0.20, 0.20, 0.25),
                Material::Diffuse,
            ),
            Sphere::new(
                Vec3::new(2.0, -2.5, -25.0),
                1.5,
                Color::new(1.0, 0.75, 0.45),
                Material::Diffuse,
            ),
            Sphere::new(
                Vec3::new(-5.0, -1.0, -35.0),
                3.0,
                Color::new(0.75, 0.45, 0.45),
                Material::Diffuse,
            ),
            Sphere::new(
                Vec3::new(5.0, 1.0, -45.0),
                5.0,
                Color::new(0.45, 0.45, 0.75),
                Material::Diffuse,
            ),
        ];
        let lights = vec![Light::new(Vec3::new(-10.0, 20.0, -10.0), Color::ONE, 1.0)];

        Self::new(spheres, lights, Color::ZERO)
    }

    /// Load a scene from a TOML file.
    pub fn from_file(path: &Path) -> TraceResult<Self> {
        debug!("Loading scene from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse a scene from TOML text.
    ///
    /// Suspicious entries (non-positive radius, colors outside [0, 1]) are
    /// logged and kept as-is.
    pub fn from_toml(text: &str) -> TraceResult<Self> {
        let file: SceneFile = toml::from_str(text)?;
        let scene = file.into_scene();
        scene.warn_suspicious();
        Ok(scene)
    }

    fn warn_suspicious(&self) {
        let out_of_range = |c: Color| c.min_element() < 0.0 || c.max_element() > 1.0;

        for (index, sphere) in self.spheres.iter().enumerate() {
            if sphere.radius <= 0.0 {
                warn!("Sphere {} has non-positive radius {}", index, sphere.radius);
            }
            if out_of_range(sphere.color) {
                warn!("Sphere {} color {} is outside [0, 1]", index, sphere.color);
            }
        }
        if out_of_range(self.background) {
            warn!("Background color {} is outside [0, 1]", self.background);
        }
    }
}

/// On-disk scene layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    background: [f32; 3],
    #[serde(default)]
    spheres: Vec<SphereEntry>,
    #[serde(default)]
    lights: Vec<LightEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereEntry {
    center: [f32; 3],
    radius: f32,
    color: [f32; 3],
    #[serde(default)]
    material: Material,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LightEntry {
    position: [f32; 3],
    #[serde(default = "white")]
    color: [f32; 3],
    #[serde(default = "unit_intensity")]
    intensity: f32,
}

fn white() -> [f32; 3] {
    [1.0; 3]
}

fn unit_intensity() -> f32 {
    1.0
}

impl SceneFile {
    fn into_scene(self) -> Scene {
        let spheres = self
            .spheres
            .into_iter()
            .map(|s| Sphere::new(vec3(s.center), s.radius, vec3(s.color), s.material))
            .collect();
        let lights = self
            .lights
            .into_iter()
            .map(|l| Light::new(vec3(l.position), vec3(l.color), l.intensity))
            .collect();

        Scene::new(spheres, lights, vec3(self.background))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TraceError;

    const REFERENCE_TOML: &str = r#"
background = [0.0, 0.0, 0.0]

[[spheres]]
center = [0.0, -10004.0, -20.0]
radius = 10000.0
color = [0.20, 0.20, 0.25]

[[spheres]]
center = [2.0, -2.5, -25.0]
radius = 1.5
color = [1.0, 0.75, 0.45]
material = "diffuse"

[[spheres]]
center = [-5.0, -1.0, -35.0]
radius = 3.0
color = [0.75, 0.45, 0.45]

[[spheres]]
center = [5.0, 1.0, -45.0]
radius = 5.0
color = [0.45, 0.45, 0.75]

[[lights]]
position = [-10.0, 20.0, -10.0]
color = [1.0, 1.0, 1.0]
intensity = 1.0
"#;

    #[test]
    fn test_reference_layout() {
        let scene = Scene::reference();
        assert_eq!(scene.spheres.len(), 4);
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.background, Color::ZERO);
        assert!(scene.spheres.iter().all(|s| s.material == Material::Diffuse));
    }

    #[test]
    fn test_toml_matches_reference() {
        let scene = Scene::from_toml(REFERENCE_TOML).unwrap();
        assert_eq!(scene, Scene::reference());
    }

    #[test]
    fn test_toml_defaults() {
        let scene = Scene::from_toml(
            r#"
[[lights]]
position = [1.0, 2.0, 3.0]
"#,
        )
        .unwrap();

        assert!(scene.spheres.is_empty());
        assert_eq!(scene.background, Color::ZERO);
        assert_eq!(scene.lights[0], Light::new(Vec3::new(1.0, 2.0, 3.0), Color::ONE, 1.0));
    }

    #[test]
    fn test_toml_material_names() {
        let scene = Scene::from_toml(
            r#"
[[spheres]]
center = [0.0, 0.0, 0.0]
radius = 1.0
color = [1.0, 1.0, 1.0]
material = "reflect_and_refract"
"#,
        )
        .unwrap();

        assert_eq!(scene.spheres[0].material, Material::ReflectAndRefract);
    }

    #[test]
    fn test_toml_rejects_unknown_material() {
        let result = Scene::from_toml(
            r#"
[[spheres]]
center = [0.0, 0.0, 0.0]
radius = 1.0
color = [1.0, 1.0, 1.0]
material = "glass"
"#,
        );

        assert!(matches!(result, Err(TraceError::Toml(_))));
    }
}
