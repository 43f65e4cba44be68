// Typed errors for the inference core.
//
// The taxonomy is deliberately small: artifact problems are fatal and
// surface once at startup, InvalidTopicIndex is the only per-call
// input-validation error. Everything else in the pipeline is total —
// degenerate input (empty text, no vocabulary matches) produces a
// deterministic result, not an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The model artifact is missing, unreadable, or not valid JSON.
    #[error("model artifact unavailable at {path}: {reason}")]
    ArtifactUnavailable { path: PathBuf, reason: String },

    /// The artifact deserialized but its structure is not usable:
    /// wrong format version, empty vocabulary, or a matrix whose shape
    /// disagrees with the vocabulary.
    #[error("model artifact incompatible: {reason}")]
    ArtifactIncompatible { reason: String },

    /// A topic index outside [0, num_topics) was requested.
    #[error("invalid topic index {topic_id}: model has {num_topics} topics")]
    InvalidTopicIndex { topic_id: i64, num_topics: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
