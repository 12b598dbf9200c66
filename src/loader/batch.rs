//! Padded stroke-5 mini-batch.

use ndarray::Array3;

/// Start token: pen down at the origin, no end flags.
///
/// Prepended to stroke-5 rows to mark the start of a sequence.
pub const START_TOKEN: [f32; 5] = [0.0, 0.0, 1.0, 0.0, 0.0];

/// One padded stroke-5 mini-batch.
///
/// Rows are sequences of `(dx, dy, p_down, p_up, p_end)` points with exactly
/// one pen-state channel set per point. `lengths[i]` counts the meaningful
/// points of row `i`, including a prepended start token where the policy
/// applies; fully padded rows record length 0.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBatch {
    /// Stroke-5 data, shape `(batch_size, max_seq_length + 1, 5)`.
    pub strokes: Array3<f32>,
    /// Recorded sequence length per row.
    pub lengths: Vec<usize>,
}

impl StrokeBatch {
    /// Number of rows in the batch.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.strokes.shape()[0]
    }

    /// Padded sequence length (`max_seq_length + 1`).
    #[must_use]
    pub fn seq_len(&self) -> usize {
        self.strokes.shape()[1]
    }
}
