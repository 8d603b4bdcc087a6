//! Error types for configuration, scene loading and image output.
//!
//! The tracing core itself never fails; everything here comes from the
//! collaborators around it.

/// Errors surfaced by the renderer and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// A zero-length (or non-finite) vector was asked for its unit direction.
    #[error("cannot normalize a degenerate vector")]
    DegenerateVector,
    /// Render configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Output path has an extension no writer handles.
    #[error("unsupported output format '{0}' (expected .ppm, .png or .exr)")]
    UnsupportedFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("EXR encoding error: {0}")]
    Exr(#[from] exr::error::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type TraceResult<T> = Result<T, TraceError>;
