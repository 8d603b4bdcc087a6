//! Camera for ray generation and scene rendering

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::hittable::{nearest_hit, HitRecord};
use crate::material::ShadingOptions;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{Color, Vec3};

/// Linear RGB pixels in row-major order, one `Rgb<f32>` per pixel.
pub type Framebuffer = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Recursion ceiling for secondary rays. No current material spawns any.
pub const MAX_RAY_DEPTH: u32 = 10;

/// Default field of view in degrees.
pub const DEFAULT_FOV: f32 = 30.0;

/// Pinhole camera at the world origin looking down -z.
///
/// The image plane sits at z = -1. One ray goes through the center of each
/// pixel; there is no multi-sampling.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Field of view in degrees
    pub fov: f32,

    /// Ray origin for every primary ray
    center: Vec3,
    /// tan(fov / 2), the half-extent of the image plane
    angle: f32,
    /// Width over height
    aspect_ratio: f32,
    inv_width: f32,
    inv_height: f32,
}

impl Camera {
    /// Creates a camera for a `width` x `height` image.
    ///
    /// Both dimensions must be positive and `fov` must lie in (0, 180).
    /// [`RenderConfig::validate`](crate::config::RenderConfig::validate)
    /// checks this for configured renders.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            image_width,
            image_height,
            fov,
            center: Vec3::ZERO,
            angle: (fov.to_radians() * 0.5).tan(),
            aspect_ratio: image_width as f32 / image_height as f32,
            inv_width: 1.0 / image_width as f32,
            inv_height: 1.0 / image_height as f32,
        }
    }

    /// Primary ray through the center of pixel (`x`, `y`), where (0, 0) is
    /// the top-left pixel.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let xx = (2.0 * ((x as f32 + 0.5) * self.inv_width) - 1.0) * self.angle * self.aspect_ratio;
        let yy = (1.0 - 2.0 * ((y as f32 + 0.5) * self.inv_height)) * self.angle;

        Ray::new(self.center, Vec3::new(xx, yy, -1.0).normalize())
    }

    /// Renders the scene, one primary ray per pixel, row by row.
    ///
    /// Pixels are independent: each is a pure function of its ray and the
    /// scene, written exactly once.
    pub fn render(&self, scene: &Scene, options: &ShadingOptions) -> Framebuffer {
        let mut image = Framebuffer::new(self.image_width, self.image_height);

        info!(
            "Tracing {}x{} pixels against {} spheres and {} lights...",
            self.image_width,
            self.image_height,
            scene.spheres.len(),
            scene.lights.len()
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(u64::from(self.image_height));
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            pb.set_style(style);
        }

        for (_, row) in image.enumerate_rows_mut() {
            for (x, y, pixel) in row {
                let color = trace(&self.get_ray(x, y), scene, options, 0);
                *pixel = Rgb([color.x, color.y, color.z]);
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }
}

/// Color seen along a ray.
///
/// Rays that hit nothing get the scene background untouched; otherwise the
/// nearest sphere's material shades the hit.
pub fn trace(r: &Ray, scene: &Scene, options: &ShadingOptions, depth: u32) -> Color {
    let Some((sphere, tnear)) = nearest_hit(r, &scene.spheres) else {
        return scene.background;
    };

    let rec = HitRecord::new(r, sphere, tnear);
    sphere.material.shade(&rec, scene, options, depth)
}
