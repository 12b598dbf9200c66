//! Configuration for the sketch loader.

use serde::{Deserialize, Serialize};

/// Start-token prefix policy for the stroke-wise protocol.
///
/// The consumer's hidden state carries across mini-batches of a run, so
/// whether non-leading pen-strokes get their own start token is a modelling
/// choice; both variants share the rest of the padding rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartTokenPolicy {
    /// Prefix every mini-batch row that carries a pen-stroke.
    #[default]
    AllStrokes,
    /// Prefix only the rows of the first mini-batch of a run.
    FirstStrokeOnly,
}

/// Configuration for [`SketchLoader`](super::SketchLoader).
///
/// All values are fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Number of sketches per cohort (mini-batch rows).
    batch_size: usize,
    /// Maximum pen-stroke length admitted by preprocessing.
    max_seq_length: usize,
    /// Divisor applied to all offsets on load.
    scale_factor: f32,
    /// Magnitude of per-axis random rescaling during sampling.
    random_scale_factor: f32,
    /// Probability of merging an eligible point during augmentation.
    augment_stroke_prob: f32,
    /// Absolute clamp bound for offsets.
    limit: f32,
    /// Seed for the loader-owned RNG.
    seed: u64,
    /// Start-token prefix policy.
    start_token_policy: StartTokenPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            max_seq_length: 250,
            scale_factor: 1.0,
            random_scale_factor: 0.0,
            augment_stroke_prob: 0.0,
            limit: 1000.0,
            seed: 42,
            start_token_policy: StartTokenPolicy::AllStrokes,
        }
    }
}

impl LoaderConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cohort size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the maximum admitted pen-stroke length.
    #[must_use]
    pub fn with_max_seq_length(mut self, len: usize) -> Self {
        self.max_seq_length = len.max(1);
        self
    }

    /// Set the offset divisor applied on load.
    #[must_use]
    pub fn with_scale_factor(mut self, factor: f32) -> Self {
        self.scale_factor = factor;
        self
    }

    /// Set the random rescaling magnitude.
    #[must_use]
    pub fn with_random_scale_factor(mut self, factor: f32) -> Self {
        self.random_scale_factor = factor;
        self
    }

    /// Set the point-dropping probability.
    #[must_use]
    pub fn with_augment_stroke_prob(mut self, prob: f32) -> Self {
        self.augment_stroke_prob = prob;
        self
    }

    /// Set the absolute clamp bound for offsets.
    #[must_use]
    pub fn with_limit(mut self, limit: f32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the start-token prefix policy.
    #[must_use]
    pub fn with_start_token_policy(mut self, policy: StartTokenPolicy) -> Self {
        self.start_token_policy = policy;
        self
    }

    /// Get the cohort size.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Get the maximum admitted pen-stroke length.
    #[must_use]
    pub fn max_seq_length(&self) -> usize {
        self.max_seq_length
    }

    /// Get the offset divisor.
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Get the random rescaling magnitude.
    #[must_use]
    pub fn random_scale_factor(&self) -> f32 {
        self.random_scale_factor
    }

    /// Get the point-dropping probability.
    #[must_use]
    pub fn augment_stroke_prob(&self) -> f32 {
        self.augment_stroke_prob
    }

    /// Get the clamp bound.
    #[must_use]
    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// Get the RNG seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the start-token prefix policy.
    #[must_use]
    pub fn start_token_policy(&self) -> StartTokenPolicy {
        self.start_token_policy
    }
}
