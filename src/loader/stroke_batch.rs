//! Stroke-wise batch construction and the run queue.
//!
//! For one cohort of sketches, the stroke-wise protocol produces a *run* of
//! `k` mini-batches (`k` = maximum pen-stroke count across the cohort);
//! mini-batch `j` holds the `j`-th pen-stroke of every sketch, or terminal
//! padding where a sketch has run out of strokes. Runs must be consumed in
//! generation order: each mini-batch's start-token prefix and end flags are
//! only meaningful relative to its position in the run.

use ndarray::{s, Array2, Array3};

use crate::stroke::split_sketch;

use super::batch::StrokeBatch;
use super::config::StartTokenPolicy;
use super::error::{LoaderError, Result};
use super::sketch_loader::{shift_in_start_token, SketchLoader};

impl SketchLoader {
    /// Build the ordered run of mini-batches for one cohort's pen-stroke
    /// decompositions.
    ///
    /// # Panics
    ///
    /// Panics when a pen-stroke exceeds `max_seq_length`; preprocessing
    /// guarantees this cannot happen for corpus data, so hitting it means a
    /// programming or data error.
    fn build_run(&self, cohort_strokes: &[Vec<Array2<f32>>]) -> Vec<StrokeBatch> {
        let batch_size = self.config.batch_size();
        let max_seq_length = self.config.max_seq_length();
        assert_eq!(cohort_strokes.len(), batch_size, "cohort size mismatch");

        let k = cohort_strokes.iter().map(Vec::len).max().unwrap_or(0);
        let mut run = Vec::with_capacity(k);

        for j in 0..k {
            let mut strokes = Array3::<f32>::zeros((batch_size, max_seq_length + 1, 5));
            let mut lengths = Vec::with_capacity(batch_size);

            for (i, sketch_strokes) in cohort_strokes.iter().enumerate() {
                let Some(pen_stroke) = sketch_strokes.get(j) else {
                    // The sketch has run out of pen-strokes: terminal
                    // padding for the rest of the run, recorded length 0.
                    strokes.slice_mut(s![i, .., 4]).fill(1.0);
                    lengths.push(0);
                    continue;
                };

                let l = pen_stroke.nrows();
                assert!(
                    l <= max_seq_length,
                    "pen-stroke length {l} exceeds max_seq_length {max_seq_length}"
                );

                for (t, row) in pen_stroke.rows().into_iter().enumerate() {
                    strokes[[i, t, 0]] = row[0];
                    strokes[[i, t, 1]] = row[1];
                    strokes[[i, t, 3]] = row[2];
                    strokes[[i, t, 2]] = 1.0 - row[2];
                }

                // Tail flag depends on the stroke's position in the sketch:
                // end-of-sketch after the final pen-stroke, end-of-stroke
                // when more follow.
                let is_last_stroke = sketch_strokes.len() <= j + 1;
                let pad_channel = if is_last_stroke { 4 } else { 3 };
                strokes.slice_mut(s![i, l.., pad_channel]).fill(1.0);

                let mut length = l;
                if j == 0 || self.config.start_token_policy() == StartTokenPolicy::AllStrokes {
                    shift_in_start_token(&mut strokes, i, max_seq_length);
                    length += 1;
                }
                lengths.push(length);
            }

            run.push(StrokeBatch { strokes, lengths });
        }

        run
    }

    /// Dequeue one stroke-wise mini-batch, refilling the queue from a fresh
    /// random cohort when it is empty.
    ///
    /// Cohorts are sampled uniformly with replacement. The queue is refilled
    /// wholesale with the new cohort's entire run, so consecutive calls
    /// yield mini-batches in generation order.
    pub fn random_stroke_batch(&mut self) -> Result<StrokeBatch> {
        if self.queue.is_empty() {
            let indices = self.sample_indices()?;
            let cohort = self.cohort_from_indices(&indices);
            let cohort_strokes: Vec<Vec<Array2<f32>>> =
                cohort.iter().map(split_sketch).collect();
            self.queue.extend(self.build_run(&cohort_strokes));
        }
        // Only an all-empty cohort produces a zero-length run.
        self.queue.pop_front().ok_or(LoaderError::EmptyCorpus)
    }

    /// Build the entire run for the deterministic cohort at `index`
    /// (the contiguous slice of the sorted corpus at
    /// `index * batch_size ..`), bypassing the queue.
    pub fn stroke_batches(&mut self, index: usize) -> Result<Vec<StrokeBatch>> {
        let num_batches = self.num_batches();
        if index >= num_batches {
            return Err(LoaderError::BatchIndexOutOfRange { index, num_batches });
        }

        let start = index * self.config.batch_size();
        let indices: Vec<usize> = (start..start + self.config.batch_size()).collect();
        let cohort = self.cohort_from_indices(&indices);
        let cohort_strokes: Vec<Vec<Array2<f32>>> = cohort.iter().map(split_sketch).collect();
        Ok(self.build_run(&cohort_strokes))
    }
}
