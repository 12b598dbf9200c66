//! Error types for loader operations.

use thiserror::Error;

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors that can occur while sampling or batching a sketch corpus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    /// The method belongs to the legacy fixed-length protocol, which is
    /// disabled in this version.
    #[error("{method} is not supported in this version")]
    Unsupported { method: &'static str },

    /// No sketches survived preprocessing, so there is nothing to sample.
    #[error("no sketches survived preprocessing")]
    EmptyCorpus,

    /// A deterministic cohort index lies past the end of the corpus.
    #[error("batch index {index} out of range ({num_batches} batches available)")]
    BatchIndexOutOfRange { index: usize, num_batches: usize },
}
