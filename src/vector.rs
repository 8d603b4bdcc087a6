//! Vector math for the tracer.
//!
//! All geometry and colors share one 3-component `f32` vector type backed by
//! [`glam::Vec3A`]. It already provides addition, negation, subtraction,
//! scalar and component-wise multiplication, dot and cross products, and the
//! Euclidean length. What glam's `normalize` does not give is an explicit
//! failure on zero length, so [`Normalize::try_unit`] adds that.

use glam::Vec3A;

use crate::error::{TraceError, TraceResult};

/// 3-D point or direction in world space.
pub type Vec3 = Vec3A;

/// Linear RGB color. Channels are not clamped and may exceed 1.0.
pub type Color = Vec3A;

/// Checked normalization.
///
/// `Vec3::normalize` keeps the unchecked contract: a zero-length input
/// produces NaN components. Callers that cannot rule out a degenerate input
/// use `try_unit` instead.
pub trait Normalize: Sized {
    /// Unit vector in the same direction, or [`TraceError::DegenerateVector`]
    /// when the length is zero or not finite.
    fn try_unit(self) -> TraceResult<Self>;
}

impl Normalize for Vec3 {
    fn try_unit(self) -> TraceResult<Self> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(TraceError::DegenerateVector);
        }
        Ok(self / length)
    }
}

/// Build a vector from a `[x, y, z]` triple.
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}
