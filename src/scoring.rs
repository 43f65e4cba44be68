// Topic scoring — assign a document vector to its dominant topic.
//
// Affinity of topic t = sum over matched terms of count(i) * matrix[t][i].
// The winner is a stable argmax: on ties the lowest topic index wins, so
// equal vectors (including the all-zero vector) always map to the same
// topic. Pure functions of the vector and the loaded model.

use crate::model::{DocVector, TopicModel};

/// Per-topic affinity scores for one document vector.
///
/// Length is always `model.num_topics()`. A vector with no vocabulary
/// matches produces all zeros, which is valid input for `assign_topic`.
pub fn topic_affinities(model: &TopicModel, vector: &DocVector) -> Vec<f64> {
    (0..model.num_topics())
        .map(|t| {
            let row = model.topic_row(t);
            vector
                .iter()
                .map(|(index, count)| f64::from(count) * row[index])
                .sum()
        })
        .collect()
}

/// The dominant topic for a document vector: argmax over affinities,
/// first occurrence wins under ascending index order.
pub fn assign_topic(model: &TopicModel, vector: &DocVector) -> usize {
    let affinities = topic_affinities(model, vector);
    let mut best = 0;
    for (t, &score) in affinities.iter().enumerate().skip(1) {
        // Strict comparison keeps the lowest index on ties.
        if score > affinities[best] {
            best = t;
        }
    }
    best
}
