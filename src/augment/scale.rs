//! Deterministic and random rescaling of stroke offsets

use ndarray::{s, Array2};
use rand::Rng;

use crate::geometry::bounds;

/// Rescale a stroke-3 sketch so the larger of its cumulative bounding-box
/// dimensions equals `average_dimension`. Returns a new array.
#[must_use]
pub fn scale_to_bound(stroke: &Array2<f32>, average_dimension: f32) -> Array2<f32> {
    let (min_x, max_x, min_y, max_y) = bounds(stroke, 1.0);
    let max_dimension = (max_x - min_x).max(max_y - min_y);

    let mut result = stroke.to_owned();
    result
        .slice_mut(s![.., 0..2])
        .mapv_inplace(|v| v / (max_dimension / average_dimension));
    result
}

/// Jitter the x and y axes independently by a uniform factor in
/// `[1 - factor, 1 + factor]`. Returns a new array.
#[must_use]
pub fn random_scale(data: &Array2<f32>, factor: f32, rng: &mut impl Rng) -> Array2<f32> {
    let x_scale = (rng.random::<f32>() - 0.5) * 2.0 * factor + 1.0;
    let y_scale = (rng.random::<f32>() - 0.5) * 2.0 * factor + 1.0;

    let mut result = data.to_owned();
    result.column_mut(0).mapv_inplace(|v| v * x_scale);
    result.column_mut(1).mapv_inplace(|v| v * y_scale);
    result
}
