// Inference facade — the one entry point collaborators call.
//
// Composes normalize -> vectorize -> assign_topic -> top_terms over a
// shared model handle and lemmatizer. Both are immutable after init, so a
// pipeline clones cheaply and runs request-parallel without locking.
// Stateless across calls; the only per-call failure is an out-of-range
// topic index, which infer itself cannot produce.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::model::TopicModel;
use crate::normalize::{self, Lemmatizer};
use crate::ranking;
use crate::scoring;

/// One inference outcome: the dominant topic and its top terms.
#[derive(Debug, Clone, Serialize)]
pub struct Inference {
    pub topic_id: usize,
    pub terms: Vec<String>,
}

/// Shared, immutable inference pipeline. Build once at startup, after
/// `TopicModel::load` and lemmatizer construction have both succeeded.
#[derive(Clone)]
pub struct TopicPipeline {
    model: Arc<TopicModel>,
    lemmatizer: Arc<Lemmatizer>,
}

impl TopicPipeline {
    pub fn new(model: Arc<TopicModel>, lemmatizer: Arc<Lemmatizer>) -> Self {
        Self { model, lemmatizer }
    }

    pub fn model(&self) -> &TopicModel {
        &self.model
    }

    /// Score raw text: dominant topic plus its `top_n` most representative
    /// terms.
    ///
    /// Degenerate input is valid input: empty text, text with no
    /// recognized tokens, and text with no vocabulary matches all score as
    /// the all-zero vector, which deterministically lands on topic 0 under
    /// the stable-argmax tie-break.
    pub fn infer(&self, text: &str, top_n: usize) -> Result<Inference> {
        let tokens = normalize::normalize(text, &self.lemmatizer);
        let vector = self.model.vectorize(&tokens);
        let topic_id = scoring::assign_topic(&self.model, &vector);
        let terms = ranking::top_terms(&self.model, topic_id, top_n)?;
        Ok(Inference { topic_id, terms })
    }
}
