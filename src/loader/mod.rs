//! Sketch corpus loader and batch construction
//!
//! Owns the preprocessed sketch corpus and produces padded stroke-5
//! mini-batches. Two protocols exist:
//!
//! - the legacy fixed-length protocol (whole sketches per batch), disabled
//!   in this version — its entry points fail with
//!   [`LoaderError::Unsupported`];
//! - the stroke-wise protocol, which feeds one pen-stroke at a time across a
//!   cohort of sketches through a FIFO run queue.

mod batch;
mod config;
mod error;
mod sketch_loader;
mod stroke_batch;


pub use batch::{StrokeBatch, START_TOKEN};
pub use config::{LoaderConfig, StartTokenPolicy};
pub use error::{LoaderError, Result};
pub use sketch_loader::SketchLoader;
