//! Linear and spherical interpolation

use ndarray::Array1;
use thiserror::Error;

/// Errors from interpolation on degenerate inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// One of the endpoints has zero length and cannot be normalized.
    #[error("cannot interpolate from a zero-length vector")]
    ZeroVector,

    /// The endpoints are collinear, so the interpolation arc is undefined.
    #[error("spherical interpolation is undefined for collinear vectors")]
    Collinear,
}

/// Linear interpolation: `(1 - t) * a + t * b`.
#[must_use]
pub fn lerp(a: &Array1<f32>, b: &Array1<f32>, t: f32) -> Array1<f32> {
    a * (1.0 - t) + b * t
}

/// Spherical interpolation between two vectors.
///
/// Interpolates along the arc spanned by the angle between the normalized
/// endpoints. Degenerate inputs (a zero-length endpoint, or collinear
/// endpoints where the arc vanishes) are rejected with a [`GeometryError`]
/// instead of producing NaN.
pub fn slerp(a: &Array1<f32>, b: &Array1<f32>, t: f32) -> Result<Array1<f32>, GeometryError> {
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(GeometryError::ZeroVector);
    }

    let cos_omega = (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    let omega = cos_omega.acos();
    let sin_omega = omega.sin();
    if sin_omega.abs() < f32::EPSILON {
        return Err(GeometryError::Collinear);
    }

    let wa = ((1.0 - t) * omega).sin() / sin_omega;
    let wb = (t * omega).sin() / sin_omega;
    Ok(a * wa + b * wb)
}
