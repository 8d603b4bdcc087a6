//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction and is used both for
//! primary (camera) rays and for shadow rays toward lights.

use crate::vector::Vec3;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point: the camera for primary rays, a point just off a
    /// surface for shadow rays.
    pub origin: Vec3,

    /// Direction of travel.
    ///
    /// Expected to be unit length but not enforced; intersection distances
    /// are only true distances when it is. Callers normalize before
    /// constructing a ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
