//! Material system for ray tracing.
//!
//! Only diffuse surfaces have a shading rule. The other tags are part of the
//! scene vocabulary but contribute black until reflection and refraction
//! passes exist.

use serde::Deserialize;

use crate::hittable::{occluded, HitRecord};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{Color, Normalize};

/// Surface material tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Lambertian direct lighting with hard shadows.
    #[default]
    Diffuse,
    Specular,
    Fresnel,
    Reflect,
    ReflectAndRefract,
}

/// Knobs for the two places where shading can depart from the original
/// renderer's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingOptions {
    /// Distance the shadow-ray origin is pushed off the surface along the
    /// normal. `1.0` reproduces the original fixed unit offset.
    pub shadow_bias: f32,
    /// Scale each light's diffuse term by its intensity.
    pub use_light_intensity: bool,
}

impl ShadingOptions {
    /// Default shadow-ray offset.
    pub const DEFAULT_SHADOW_BIAS: f32 = 1.0e-4;

    /// Options that reproduce the original images exactly: unit shadow
    /// offset, intensity ignored.
    pub fn reference() -> Self {
        Self {
            shadow_bias: 1.0,
            use_light_intensity: false,
        }
    }
}

impl Default for ShadingOptions {
    fn default() -> Self {
        Self {
            shadow_bias: Self::DEFAULT_SHADOW_BIAS,
            use_light_intensity: false,
        }
    }
}

impl Material {
    /// Outgoing color at a hit.
    ///
    /// `depth` is the current recursion level. No material recurses yet, so
    /// it only travels along for the future reflect/refract passes.
    pub fn shade(
        &self,
        rec: &HitRecord<'_>,
        scene: &Scene,
        options: &ShadingOptions,
        _depth: u32,
    ) -> Color {
        match self {
            Material::Diffuse => shade_diffuse(rec, scene, options),
            Material::Specular
            | Material::Fresnel
            | Material::Reflect
            | Material::ReflectAndRefract => Color::ZERO,
        }
    }
}

/// Sum of unoccluded Lambert terms over every light.
fn shade_diffuse(rec: &HitRecord<'_>, scene: &Scene, options: &ShadingOptions) -> Color {
    let mut color = Color::ZERO;
    let shadow_origin = rec.p + rec.normal * options.shadow_bias;

    for light in &scene.lights {
        // A light sitting exactly on the hit point has no direction.
        let Ok(light_direction) = (light.position - rec.p).try_unit() else {
            continue;
        };

        let shadow_ray = Ray::new(shadow_origin, light_direction);
        if occluded(&shadow_ray, &scene.spheres) {
            continue;
        }

        let cosine = rec.normal.dot(light_direction).max(0.0);
        let mut contribution = rec.sphere.color * cosine * light.color;
        if options.use_light_intensity {
            contribution *= light.intensity;
        }
        color += contribution;
    }

    color
}
