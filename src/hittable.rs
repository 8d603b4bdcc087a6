//! Ray-object intersection system.
//!
//! Holds the transient per-test [`Intersection`], the [`HitRecord`] handed to
//! shading, and the two scene-wide queries: the nearest-hit scan used for
//! primary rays and the any-hit test used for shadow rays. Both are plain
//! linear scans over the sphere list.

use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::Vec3;

/// Near/far ray parameters of one ray/sphere crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub t0: f32,
    pub t1: f32,
}

impl Intersection {
    pub fn new(t0: f32, t1: f32) -> Self {
        Self { t0, t1 }
    }

    /// Ray parameter used for nearest-hit ranking: the near root, or the far
    /// root when the near one lies behind the origin.
    pub fn nearest(&self) -> f32 {
        if self.t0 < 0.0 {
            self.t1
        } else {
            self.t0
        }
    }
}

/// Ray-object intersection information needed for shading.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    /// Sphere that was hit
    pub sphere: &'a Sphere,
    /// Distance along the ray to the hit point (`tnear`)
    pub t: f32,
    /// Point where the ray meets the surface
    pub p: Vec3,
    /// Unit surface normal, always facing against the incoming ray
    pub normal: Vec3,
    /// True when the ray struck the inside of the surface and the normal was
    /// flipped. Reserved for refraction; shading does not read it.
    pub inside: bool,
}

impl<'a> HitRecord<'a> {
    /// Build the record for `sphere` hit at parameter `t` along `r`.
    pub fn new(r: &Ray, sphere: &'a Sphere, t: f32) -> Self {
        let p = r.at(t);
        let mut rec = Self {
            sphere,
            t,
            p,
            normal: Vec3::ZERO,
            inside: false,
        };
        rec.set_face_normal(r, sphere.normal_at(p));
        rec
    }

    /// Set surface normal and determine whether the hit is from the inside.
    ///
    /// Ensures the normal always points against the incident ray.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.inside = r.direction.dot(outward_normal) > 0.0;
        self.normal = if self.inside {
            -outward_normal
        } else {
            outward_normal
        };
    }
}

/// Hits at or beyond this distance are treated as misses.
pub const FAR_LIMIT: f32 = 1.0e6;

/// Find the closest sphere along the ray.
///
/// Returns the winning sphere and its adjusted hit distance. Ties keep the
/// sphere that comes first in the list.
pub fn nearest_hit<'a>(r: &Ray, spheres: &'a [Sphere]) -> Option<(&'a Sphere, f32)> {
    let mut tnear = FAR_LIMIT;
    let mut closest = None;

    for sphere in spheres {
        if let Some(intersection) = sphere.intersect(r) {
            let t = intersection.nearest();
            if t < tnear {
                tnear = t;
                closest = Some(sphere);
            }
        }
    }

    closest.map(|sphere| (sphere, tnear))
}

/// Whether any sphere intersects the ray at all.
///
/// No distance limit is applied: a hit anywhere along the ray, beyond the
/// light or with a negative near root, still counts as occlusion.
pub fn occluded(r: &Ray, spheres: &[Sphere]) -> bool {
    spheres.iter().any(|sphere| sphere.intersect(r).is_some())
}
