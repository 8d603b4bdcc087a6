//! Sphere primitive for ray tracing.
//!
//! Intersection uses the geometric (projection) solution rather than the
//! full quadratic: project the center onto the ray, reject if it lies
//! behind the origin, then measure how far the ray line passes from the
//! center.

use crate::hittable::Intersection;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{Color, Vec3};

/// Sphere primitive defined by center, radius, surface color and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3,

    /// Radius of the sphere, expected to be positive.
    pub radius: f32,

    /// Surface color, RGB in [0, 1].
    pub color: Color,

    /// Material tag selecting the shading rule.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color, material: Material) -> Self {
        Self {
            center,
            radius,
            color,
            material,
        }
    }

    /// Test the ray against this sphere.
    ///
    /// Returns the near/far ray parameters where the ray crosses the
    /// surface, with `t0 <= t1`. Both can be negative; the caller decides
    /// which root is usable.
    ///
    /// A sphere whose center projects behind the ray origin is never
    /// reported, even when part of it lies in front of the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        if tca < 0.0 {
            return None;
        }

        // Squared distance from the center to the ray line
        let d2 = l.dot(l) - tca * tca;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        Some(Intersection::new(tca - thc, tca + thc))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
