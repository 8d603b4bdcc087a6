//! Spheretrace ray tracer
//!
//! Renders a static scene of spheres and point lights with one primary ray
//! per pixel, Lambert shading and hard shadows. Output is ASCII PPM, PNG or
//! OpenEXR.

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod error;
pub mod hittable;
pub mod light;
pub mod material;
pub mod output;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod vector;

pub use camera::{trace, Camera, Framebuffer};
pub use config::{PartialConfig, RenderConfig};
pub use error::{TraceError, TraceResult};
pub use material::{Material, ShadingOptions};
pub use scene::Scene;
