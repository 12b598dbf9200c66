//! Geometry and interpolation utilities
//!
//! Bounding-box computation over cumulative stroke paths, plus linear and
//! spherical interpolation between latent vectors.

mod bounds;
mod interp;


pub use bounds::bounds;
pub use interp::{lerp, slerp, GeometryError};
