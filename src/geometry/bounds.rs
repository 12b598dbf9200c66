//! Bounding box of a cumulative stroke path

use ndarray::Array2;

/// Bounds of the absolute path traced by a stroke-3 sketch.
///
/// Accumulates `(dx, dy) / factor` from the origin and returns
/// `(min_x, max_x, min_y, max_y)` of the running position. The origin is
/// always inside the box, so an empty sketch yields all zeros.
#[must_use]
pub fn bounds(sketch: &Array2<f32>, factor: f32) -> (f32, f32, f32, f32) {
    let mut min_x = 0.0f32;
    let mut max_x = 0.0f32;
    let mut min_y = 0.0f32;
    let mut max_y = 0.0f32;

    let mut abs_x = 0.0f32;
    let mut abs_y = 0.0f32;
    for row in sketch.rows() {
        abs_x += row[0] / factor;
        abs_y += row[1] / factor;
        min_x = min_x.min(abs_x);
        max_x = max_x.max(abs_x);
        min_y = min_y.min(abs_y);
        max_y = max_y.max(abs_y);
    }

    (min_x, max_x, min_y, max_y)
}
