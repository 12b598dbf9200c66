//! Stochastic sketch augmentation
//!
//! Point-dropping inside pen-strokes and random rescaling. All functions
//! return new arrays and take the caller's RNG explicitly, so augmented
//! sampling stays reproducible from a single seed.

mod dropout;
mod scale;


pub use dropout::drop_points;
pub use scale::{random_scale, scale_to_bound};
