// Unit tests for topic scoring and term ranking over an in-memory toy
// model.

use topical::error::Error;
use topical::model::artifact::{TopicArtifact, FORMAT_VERSION};
use topical::model::TopicModel;
use topical::ranking::top_terms;
use topical::scoring::{assign_topic, topic_affinities};

fn model(vocabulary: &[&str], matrix: Vec<Vec<f64>>) -> TopicModel {
    TopicModel::from_artifact(TopicArtifact {
        format_version: FORMAT_VERSION,
        vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
        topic_term_matrix: matrix,
    })
}

fn toy() -> TopicModel {
    model(
        &["cat", "dog", "stock", "market"],
        vec![vec![5.0, 4.0, 0.0, 0.0], vec![0.0, 0.0, 5.0, 4.0]],
    )
}

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// Scoring
// ============================================================

#[test]
fn affinities_are_count_weighted_sums() {
    let m = toy();
    let v = m.vectorize(&tokens(&["cat", "cat", "dog", "market"]));
    let scores = topic_affinities(&m, &v);
    assert_eq!(scores.len(), 2);
    assert!((scores[0] - 14.0).abs() < f64::EPSILON); // 2*5 + 1*4
    assert!((scores[1] - 4.0).abs() < f64::EPSILON); // 1*4
}

#[test]
fn argmax_picks_the_dominant_topic() {
    let m = toy();
    let pets = m.vectorize(&tokens(&["cat", "dog"]));
    let finance = m.vectorize(&tokens(&["stock", "market", "market"]));
    assert_eq!(assign_topic(&m, &pets), 0);
    assert_eq!(assign_topic(&m, &finance), 1);
}

#[test]
fn ties_resolve_to_the_lowest_topic_index() {
    // Both topics weight "cat" identically, and a third topic does too.
    let m = model(&["cat"], vec![vec![2.0], vec![2.0], vec![2.0]]);
    let v = m.vectorize(&tokens(&["cat"]));
    assert_eq!(assign_topic(&m, &v), 0);
}

#[test]
fn zero_vector_is_valid_and_deterministic() {
    let m = toy();
    let empty = m.vectorize(&[]);
    assert!(empty.is_empty());
    // All affinities are zero; the stable argmax lands on topic 0.
    assert_eq!(topic_affinities(&m, &empty), vec![0.0, 0.0]);
    assert_eq!(assign_topic(&m, &empty), 0);
    assert_eq!(assign_topic(&m, &empty), assign_topic(&m, &m.vectorize(&[])));
}

#[test]
fn equal_vectors_always_get_the_same_topic() {
    let m = toy();
    let a = m.vectorize(&tokens(&["stock", "cat", "stock"]));
    let b = m.vectorize(&tokens(&["stock", "stock", "cat"]));
    assert_eq!(assign_topic(&m, &a), assign_topic(&m, &b));
}

// ============================================================
// Term ranking
// ============================================================

#[test]
fn terms_come_back_most_representative_first() {
    let m = toy();
    assert_eq!(top_terms(&m, 0, 2).unwrap(), vec!["cat", "dog"]);
    assert_eq!(top_terms(&m, 1, 2).unwrap(), vec!["stock", "market"]);
}

#[test]
fn result_length_is_min_of_n_and_vocab_size() {
    let m = toy();
    assert_eq!(top_terms(&m, 0, 0).unwrap().len(), 0);
    assert_eq!(top_terms(&m, 0, 3).unwrap().len(), 3);
    // Clamped to the full vocabulary, no error.
    assert_eq!(top_terms(&m, 0, 100).unwrap().len(), 4);
}

#[test]
fn weight_ties_break_by_ascending_vocabulary_index() {
    let m = model(
        &["alpha", "beta", "gamma", "delta"],
        vec![vec![1.0, 3.0, 1.0, 3.0]],
    );
    // beta/delta tie at 3.0 (beta first), alpha/gamma tie at 1.0 (alpha first).
    assert_eq!(
        top_terms(&m, 0, 4).unwrap(),
        vec!["beta", "delta", "alpha", "gamma"]
    );
}

#[test]
fn ranking_is_strictly_descending_by_weight() {
    let m = model(
        &["a", "b", "c", "d", "e"],
        vec![vec![0.1, 9.0, 3.5, 3.5, 0.0]],
    );
    assert_eq!(top_terms(&m, 0, 5).unwrap(), vec!["b", "c", "d", "a", "e"]);
}

#[test]
fn out_of_range_topic_is_rejected() {
    let m = toy();
    let err = top_terms(&m, 2, 3).unwrap_err();
    match err {
        Error::InvalidTopicIndex {
            topic_id,
            num_topics,
        } => {
            assert_eq!(topic_id, 2);
            assert_eq!(num_topics, 2);
        }
        other => panic!("expected InvalidTopicIndex, got {other}"),
    }
}
