//! Sketch corpus loader: construction, preprocessing and sampling.

use std::collections::VecDeque;

use ndarray::{s, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::augment::{drop_points, random_scale};
use crate::stroke::max_stroke_len;

use super::batch::{StrokeBatch, START_TOKEN};
use super::config::LoaderConfig;
use super::error::{LoaderError, Result};

/// Loader over a preprocessed stroke-3 sketch corpus.
///
/// Construction preprocesses the raw corpus immediately (filter, clamp,
/// scale, sort); the stored corpus is immutable afterwards except for an
/// explicit [`normalize`](Self::normalize) pass. All randomness comes from a
/// loader-owned RNG seeded via [`LoaderConfig`], so sampling is reproducible.
///
/// Single-threaded by design: the internal run queue is an unsynchronized
/// FIFO owned by this instance and is not safe for concurrent use.
pub struct SketchLoader {
    pub(crate) config: LoaderConfig,
    /// Effective offset divisor; updated by `normalize`.
    scale_factor: f32,
    /// Retained sketches, sorted ascending by total point count.
    pub(crate) sketches: Vec<Array2<f32>>,
    /// Pending mini-batches of the most recently generated run.
    pub(crate) queue: VecDeque<StrokeBatch>,
    pub(crate) rng: StdRng,
}

impl SketchLoader {
    /// Build a loader from a raw stroke-3 corpus and preprocess it.
    #[must_use]
    pub fn new(corpus: Vec<Array2<f32>>, config: LoaderConfig) -> Self {
        let mut loader = Self {
            rng: StdRng::seed_from_u64(config.seed()),
            scale_factor: config.scale_factor(),
            sketches: Vec::new(),
            queue: VecDeque::new(),
            config,
        };
        loader.preprocess(corpus);
        loader
    }

    /// Filter, clamp, scale and sort the raw corpus.
    ///
    /// Sketches are discarded when their longest pen-stroke (not their total
    /// length) exceeds `max_seq_length`. Surviving offsets are clamped to
    /// `[-limit, limit]`, divided by `scale_factor`, and the corpus is
    /// stably sorted ascending by total point count (original order on
    /// ties), so downstream consumers can bucket by length.
    fn preprocess(&mut self, corpus: Vec<Array2<f32>>) {
        let max_seq_length = self.config.max_seq_length();
        let limit = self.config.limit();
        let scale = self.scale_factor;

        let mut retained: Vec<(usize, Array2<f32>)> = Vec::new();
        for (index, mut sketch) in corpus.into_iter().enumerate() {
            if max_stroke_len(&sketch) > max_seq_length {
                continue;
            }
            sketch
                .slice_mut(s![.., 0..2])
                .mapv_inplace(|v| v.clamp(-limit, limit) / scale);
            retained.push((index, sketch));
        }

        retained.sort_by_key(|(index, sketch)| (sketch.nrows(), *index));
        self.sketches = retained.into_iter().map(|(_, sketch)| sketch).collect();
    }

    /// Number of retained sketches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sketches.len()
    }

    /// Whether preprocessing retained no sketches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sketches.is_empty()
    }

    /// Number of full deterministic cohorts in the corpus.
    #[must_use]
    pub fn num_batches(&self) -> usize {
        self.sketches.len() / self.config.batch_size()
    }

    /// Get a retained sketch by sorted position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Array2<f32>> {
        self.sketches.get(index)
    }

    /// Get the loader configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Get the effective offset divisor (updated by [`normalize`](Self::normalize)).
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Population standard deviation of all stored `(dx, dy)` offsets.
    ///
    /// Returns 0 for an empty corpus.
    #[must_use]
    pub fn calculate_normalizing_scale_factor(&self) -> f32 {
        let mut count = 0usize;
        let mut sum = 0.0f64;
        for sketch in &self.sketches {
            for value in sketch.slice(s![.., 0..2]) {
                sum += f64::from(*value);
                count += 1;
            }
        }
        if count == 0 {
            return 0.0;
        }
        let mean = sum / count as f64;

        let mut sq_sum = 0.0f64;
        for sketch in &self.sketches {
            for value in sketch.slice(s![.., 0..2]) {
                let d = f64::from(*value) - mean;
                sq_sum += d * d;
            }
        }
        (sq_sum / count as f64).sqrt() as f32
    }

    /// Divide all stored offsets by `factor` and record it as the effective
    /// scale factor. Computes the normalizing standard deviation when no
    /// factor is given.
    pub fn normalize(&mut self, factor: Option<f32>) -> Result<f32> {
        let factor = match factor {
            Some(factor) => factor,
            None => {
                if self.sketches.is_empty() {
                    return Err(LoaderError::EmptyCorpus);
                }
                self.calculate_normalizing_scale_factor()
            }
        };

        self.scale_factor = factor;
        for sketch in &mut self.sketches {
            sketch.slice_mut(s![.., 0..2]).mapv_inplace(|v| v / factor);
        }
        Ok(factor)
    }

    /// Return one sketch chosen uniformly at random (with replacement), as a
    /// stroke-3 copy.
    pub fn random_sample(&mut self) -> Result<Array2<f32>> {
        if self.sketches.is_empty() {
            return Err(LoaderError::EmptyCorpus);
        }
        let index = self.rng.random_range(0..self.sketches.len());
        Ok(self.sketches[index].clone())
    }

    /// Sample `batch_size` corpus positions uniformly with replacement.
    pub(crate) fn sample_indices(&mut self) -> Result<Vec<usize>> {
        if self.sketches.is_empty() {
            return Err(LoaderError::EmptyCorpus);
        }
        let len = self.sketches.len();
        Ok((0..self.config.batch_size())
            .map(|_| self.rng.random_range(0..len))
            .collect())
    }

    /// Copy the sketches at `indices`, applying random rescaling and, when
    /// enabled, point-dropping augmentation.
    pub(crate) fn cohort_from_indices(&mut self, indices: &[usize]) -> Vec<Array2<f32>> {
        indices
            .iter()
            .map(|&index| {
                let data = random_scale(
                    &self.sketches[index],
                    self.config.random_scale_factor(),
                    &mut self.rng,
                );
                let prob = self.config.augment_stroke_prob();
                if prob > 0.0 {
                    drop_points(&data, prob, &mut self.rng)
                } else {
                    data
                }
            })
            .collect()
    }

    /// Legacy fixed-length protocol: random cohort of whole sketches.
    ///
    /// Disabled in this version; always fails without executing any
    /// batching logic.
    pub fn random_batch(&mut self) -> Result<StrokeBatch> {
        Err(LoaderError::Unsupported {
            method: "random_batch",
        })
    }

    /// Legacy fixed-length protocol: deterministic cohort of whole sketches.
    ///
    /// Disabled in this version; always fails without executing any
    /// batching logic.
    pub fn get_batch(&mut self, _index: usize) -> Result<StrokeBatch> {
        Err(LoaderError::Unsupported { method: "get_batch" })
    }

    /// Pad a cohort of whole stroke-3 sketches into one stroke-5 batch.
    ///
    /// Helper of the disabled fixed-length protocol, kept isolated from the
    /// public surface. Applies the same padding rules as the stroke-wise
    /// protocol to whole sketches at once: data rows, end-of-sketch tail,
    /// then the start-token shift.
    #[allow(dead_code)]
    pub(super) fn pad_batch(&self, batch: &[Array2<f32>]) -> StrokeBatch {
        let batch_size = self.config.batch_size();
        let max_len = self.config.max_seq_length();
        assert_eq!(batch.len(), batch_size, "cohort size mismatch");

        let mut strokes = ndarray::Array3::<f32>::zeros((batch_size, max_len + 1, 5));
        let mut lengths = Vec::with_capacity(batch_size);

        for (i, sketch) in batch.iter().enumerate() {
            let l = sketch.nrows();
            assert!(l <= max_len, "sketch length {l} exceeds max_seq_length {max_len}");

            for (t, row) in sketch.rows().into_iter().enumerate() {
                strokes[[i, t, 0]] = row[0];
                strokes[[i, t, 1]] = row[1];
                strokes[[i, t, 3]] = row[2];
                strokes[[i, t, 2]] = 1.0 - row[2];
            }
            strokes.slice_mut(s![i, l.., 4]).fill(1.0);

            shift_in_start_token(&mut strokes, i, max_len);
            lengths.push(l + 1);
        }

        StrokeBatch { strokes, lengths }
    }
}

/// Shift row `i` right by one timestep and write the start token at
/// position 0. The former final position (always padding) falls off.
pub(super) fn shift_in_start_token(
    strokes: &mut ndarray::Array3<f32>,
    i: usize,
    max_len: usize,
) {
    for t in (1..=max_len).rev() {
        for c in 0..5 {
            strokes[[i, t, c]] = strokes[[i, t - 1, c]];
        }
    }
    for c in 0..5 {
        strokes[[i, 0, c]] = START_TOKEN[c];
    }
}
