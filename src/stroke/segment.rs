//! Sketch segmentation into pen-strokes

use ndarray::{s, Array2};

/// Split a stroke-3 sketch into its ordered pen-strokes.
///
/// A pen-stroke is a maximal run of points ending at (and including) a point
/// with `pen_lift = 1`; a trailing run without a lift is still a pen-stroke.
/// Concatenating the result reconstructs the sketch exactly.
#[must_use]
pub fn split_sketch(sketch: &Array2<f32>) -> Vec<Array2<f32>> {
    let mut pen_strokes = Vec::new();
    let mut start = 0;

    for (i, row) in sketch.rows().into_iter().enumerate() {
        if row[2] == 1.0 {
            pen_strokes.push(sketch.slice(s![start..=i, ..]).to_owned());
            start = i + 1;
        }
    }
    if start < sketch.nrows() {
        pen_strokes.push(sketch.slice(s![start.., ..]).to_owned());
    }

    pen_strokes
}

/// Maximum pen-stroke length within one sketch.
#[must_use]
pub fn max_stroke_len(sketch: &Array2<f32>) -> usize {
    split_sketch(sketch)
        .iter()
        .map(Array2::nrows)
        .max()
        .unwrap_or(0)
}

/// Maximum pen-stroke length across a corpus of sketches.
#[must_use]
pub fn max_len(corpus: &[Array2<f32>]) -> usize {
    corpus.iter().map(max_stroke_len).max().unwrap_or(0)
}
