//! Trazar: pen-stroke sketch data preparation for sequence-model training
//!
//! Converts between stroke encodings, filters and normalizes a sketch
//! corpus, applies stochastic augmentation, and assembles padded stroke-5
//! mini-batches — including the stroke-wise batching protocol that feeds one
//! pen-stroke at a time across a cohort of sketches.
//!
//! # Stroke formats
//!
//! - **stroke-3**: `(dx, dy, pen_lift)` offsets relative to the previous
//!   point; `pen_lift = 1` marks the last point of a pen-stroke.
//! - **stroke-5**: `(dx, dy, p_down, p_up, p_end)` with a one-hot pen state.
//!   Batches are padded to a common length and prefixed by the start token
//!   `[0, 0, 1, 0, 0]`.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use trazar::{LoaderConfig, SketchLoader};
//!
//! let corpus = vec![
//!     array![[1.0, 0.0, 0.0], [0.0, 1.0, 1.0], [2.0, 2.0, 1.0]],
//!     array![[1.0, 1.0, 1.0]],
//! ];
//! let config = LoaderConfig::new().with_batch_size(2).with_max_seq_length(8);
//! let mut loader = SketchLoader::new(corpus, config);
//!
//! let batch = loader.random_stroke_batch().unwrap();
//! assert_eq!(batch.batch_size(), 2);
//! assert_eq!(batch.seq_len(), 9);
//! ```

pub mod augment;
pub mod geometry;
pub mod loader;
pub mod stroke;

pub use geometry::GeometryError;
pub use loader::{
    LoaderConfig, LoaderError, Result, SketchLoader, StartTokenPolicy, StrokeBatch, START_TOKEN,
};
