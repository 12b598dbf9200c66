//! Random point-dropping within pen-strokes

use ndarray::Array2;
use rand::Rng;

/// Augment a stroke-3 sketch by randomly merging points into their
/// predecessor with probability `prob`.
///
/// A candidate point is only merged when it is not itself a pen-lift, the
/// previously emitted point is not a pen-lift, and more than two points have
/// been consumed since the last lift. The first two and the last point of
/// every pen-stroke therefore always survive, and no merge crosses a
/// pen-lift boundary. Merged points accumulate their offsets into the last
/// emitted point, so the absolute path endpoint is preserved.
#[must_use]
pub fn drop_points(strokes: &Array2<f32>, prob: f32, rng: &mut impl Rng) -> Array2<f32> {
    let mut result: Vec<[f32; 3]> = Vec::with_capacity(strokes.nrows());
    // Virtual pen-lift before the first point keeps stroke heads intact.
    let mut prev_lift = true;
    let mut count = 0;

    for row in strokes.rows() {
        let candidate = [row[0], row[1], row[2]];
        let lift = candidate[2] == 1.0;
        if lift || prev_lift {
            count = 0;
        } else {
            count += 1;
        }

        let urnd: f32 = rng.random();
        if !lift && !prev_lift && count > 2 && urnd < prob {
            if let Some(last) = result.last_mut() {
                last[0] += candidate[0];
                last[1] += candidate[1];
            }
        } else {
            result.push(candidate);
            prev_lift = lift;
        }
    }

    let mut out = Array2::<f32>::zeros((result.len(), 3));
    for (i, point) in result.iter().enumerate() {
        out[[i, 0]] = point[0];
        out[[i, 1]] = point[1];
        out[[i, 2]] = point[2];
    }
    out
}
