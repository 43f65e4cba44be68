// Term ranking — the most representative vocabulary terms for a topic.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::model::TopicModel;

/// The `top_n` highest-weighted terms of one topic, most representative
/// first.
///
/// Ordering is an explicit sort: descending weight, ties broken by
/// ascending vocabulary index. `top_n` is clamped to the vocabulary size;
/// zero yields an empty list. Out-of-range `topic_id` is the one
/// per-call validation error in the core.
pub fn top_terms(model: &TopicModel, topic_id: usize, top_n: usize) -> Result<Vec<String>> {
    if topic_id >= model.num_topics() {
        return Err(Error::InvalidTopicIndex {
            topic_id: topic_id as i64,
            num_topics: model.num_topics(),
        });
    }

    let row = model.topic_row(topic_id);
    let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
    // Weights are validated finite at load time, so partial_cmp cannot
    // actually fail; the index tie-break makes the order total.
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    Ok(ranked
        .into_iter()
        .take(top_n.min(model.vocab_size()))
        .map(|(index, _)| model.term(index).to_string())
        .collect())
}
