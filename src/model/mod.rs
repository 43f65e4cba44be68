// The loaded model handle — exclusive owner of the vocabulary and the
// topic-term matrix.
//
// Loading is the expensive, failure-prone step; it happens once, before any
// inference is dispatched. After that the handle is immutable and shared
// (Arc) by every concurrent call, so the rest of the pipeline treats the
// artifact as a cheap, infallible dependency. Dropping the handle at
// shutdown releases the artifact.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

pub mod artifact;

use artifact::TopicArtifact;

/// Sparse count vector over the model vocabulary.
///
/// Keys are vocabulary indices, always in [0, vocab_size); values are
/// occurrence counts. Produced per request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocVector {
    counts: HashMap<usize, u32>,
}

impl DocVector {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct vocabulary terms with a nonzero count.
    pub fn nnz(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().map(|(&i, &c)| (i, c))
    }
}

/// A fitted topic model: vocabulary + topic-term matrix, immutable after load.
#[derive(Debug)]
pub struct TopicModel {
    vocabulary: Vec<String>,
    /// term -> vocabulary index, for O(1) vectorization lookups.
    vocab_index: HashMap<String, usize>,
    topic_term_matrix: Vec<Vec<f64>>,
}

impl TopicModel {
    /// Load and validate a model artifact from disk.
    ///
    /// Missing/unreadable/corrupt file -> `ArtifactUnavailable`; structure
    /// that deserialized but cannot be safely indexed -> `ArtifactIncompatible`.
    /// Both are fatal: callers must not begin serving on error.
    pub fn load(path: &Path) -> Result<Self> {
        let unavailable = |reason: String| Error::ArtifactUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        let raw = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        let artifact: TopicArtifact =
            serde_json::from_str(&raw).map_err(|e| unavailable(e.to_string()))?;
        artifact.validate()?;

        let model = Self::from_artifact(artifact);
        info!(
            path = %path.display(),
            topics = model.num_topics(),
            vocab = model.vocab_size(),
            "Loaded topic model"
        );
        Ok(model)
    }

    /// Build a handle from an already-validated artifact. Used by `load`
    /// and by tests that construct toy models in memory.
    pub fn from_artifact(artifact: TopicArtifact) -> Self {
        let vocab_index = artifact
            .vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self {
            vocabulary: artifact.vocabulary,
            vocab_index,
            topic_term_matrix: artifact.topic_term_matrix,
        }
    }

    pub fn num_topics(&self) -> usize {
        self.topic_term_matrix.len()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The canonical term at vocabulary position `index`.
    pub fn term(&self, index: usize) -> &str {
        &self.vocabulary[index]
    }

    /// The weight row for one topic. Callers validate the index first.
    pub(crate) fn topic_row(&self, topic_id: usize) -> &[f64] {
        &self.topic_term_matrix[topic_id]
    }

    /// Count normalized tokens against the fixed vocabulary.
    ///
    /// Out-of-vocabulary tokens are silently dropped — they contribute zero
    /// count and zero influence on scoring. That is the trained model's
    /// policy, not an oversight. Order-independent.
    pub fn vectorize(&self, tokens: &[String]) -> DocVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in tokens {
            if let Some(&index) = self.vocab_index.get(token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }
        DocVector { counts }
    }
}
