//! Point lights.

use crate::vector::{Color, Vec3};

/// Point light source.
///
/// `intensity` is carried for scene descriptions but only scales the
/// diffuse term when [`ShadingOptions::use_light_intensity`] is set.
///
/// [`ShadingOptions::use_light_intensity`]: crate::material::ShadingOptions::use_light_intensity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

impl Default for Light {
    /// White unit-intensity light at the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Color::ONE, 1.0)
    }
}
