//! Conversions between polyline, stroke-3 and stroke-5 encodings

use ndarray::Array2;

/// Convert a stroke-3 sketch to polylines of absolute points.
///
/// Each pen-stroke becomes one polyline; positions accumulate from the
/// origin. Inverse of [`lines_to_strokes`] up to float rounding.
#[must_use]
pub fn strokes_to_lines(strokes: &Array2<f32>) -> Vec<Vec<[f32; 2]>> {
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    let mut lines = Vec::new();
    let mut line = Vec::new();

    for row in strokes.rows() {
        x += row[0];
        y += row[1];
        line.push([x, y]);
        if row[2] == 1.0 {
            lines.push(std::mem::take(&mut line));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Convert polylines of absolute points to a stroke-3 sketch.
///
/// The first offset is taken relative to the origin; the last point of every
/// polyline is marked with `pen_lift = 1`.
#[must_use]
pub fn lines_to_strokes(lines: &[Vec<[f32; 2]>]) -> Array2<f32> {
    let total: usize = lines.iter().map(Vec::len).sum();
    let mut strokes = Array2::<f32>::zeros((total, 3));

    let mut prev = [0.0f32, 0.0f32];
    let mut i = 0;
    for line in lines {
        for (j, point) in line.iter().enumerate() {
            strokes[[i, 0]] = point[0] - prev[0];
            strokes[[i, 1]] = point[1] - prev[1];
            strokes[[i, 2]] = if j + 1 == line.len() { 1.0 } else { 0.0 };
            prev = *point;
            i += 1;
        }
    }

    strokes
}

/// Convert stroke-3 to stroke-5, padded to `max_len` (no start token).
///
/// Pen states become the one-hot `(p_down, p_up, p_end)` with
/// `p_down = 1 - pen_lift`; padding rows carry `p_end = 1`.
///
/// # Panics
///
/// Panics if the sketch is longer than `max_len`; feeding an over-length
/// sketch here is a data error upstream filtering must prevent.
#[must_use]
pub fn to_big_strokes(stroke: &Array2<f32>, max_len: usize) -> Array2<f32> {
    let l = stroke.nrows();
    assert!(l <= max_len, "sketch length {l} exceeds max_len {max_len}");

    let mut result = Array2::<f32>::zeros((max_len, 5));
    for (i, row) in stroke.rows().into_iter().enumerate() {
        result[[i, 0]] = row[0];
        result[[i, 1]] = row[1];
        result[[i, 3]] = row[2];
        result[[i, 2]] = 1.0 - row[2];
    }
    for i in l..max_len {
        result[[i, 4]] = 1.0;
    }

    result
}

/// Convert stroke-5 back to stroke-3.
///
/// Truncates at the first point whose end-of-sketch channel is set; the full
/// length is used when no point carries the flag.
#[must_use]
pub fn to_normal_strokes(big_stroke: &Array2<f32>) -> Array2<f32> {
    let l = big_stroke
        .rows()
        .into_iter()
        .position(|row| row[4] > 0.0)
        .unwrap_or(big_stroke.nrows());

    let mut result = Array2::<f32>::zeros((l, 3));
    for i in 0..l {
        result[[i, 0]] = big_stroke[[i, 0]];
        result[[i, 1]] = big_stroke[[i, 1]];
        result[[i, 2]] = big_stroke[[i, 3]];
    }

    result
}

/// Quantize a stroke-5 sample to integer export rows.
///
/// Offsets are rounded after scaling by `factor`. Output stops at the first
/// end-of-sketch flag and always ends with exactly one terminal
/// `[0, 0, 0, 0, 1]` row, ready for an external JSON/image exporter.
#[must_use]
pub fn clean_strokes(sample: &Array2<f32>, factor: f32) -> Vec<[i32; 5]> {
    let mut cleaned = Vec::with_capacity(sample.nrows() + 1);

    for row in sample.rows() {
        if row[4] as i32 != 0 {
            break;
        }
        cleaned.push([
            (row[0] * factor).round() as i32,
            (row[1] * factor).round() as i32,
            row[2] as i32,
            row[3] as i32,
            0,
        ]);
    }
    cleaned.push([0, 0, 0, 0, 1]);

    cleaned
}
