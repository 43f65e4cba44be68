// On-disk model artifact schema.
//
// The artifact is an explicit, versioned JSON document — a vocabulary plus
// a dense topic-term weight matrix with a declared shape — produced by the
// offline training job. Structural validation happens here, at load time;
// nothing downstream ever re-checks shapes or weights.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The only artifact format this build understands.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized form of a fitted topic model.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicArtifact {
    pub format_version: u32,
    /// Position i is the canonical identity of term i everywhere:
    /// vectorizer output index and matrix column alike.
    pub vocabulary: Vec<String>,
    /// Row t, column i: affinity of term i to topic t.
    pub topic_term_matrix: Vec<Vec<f64>>,
}

impl TopicArtifact {
    /// Reject any structure the inference core cannot safely index into.
    pub fn validate(&self) -> Result<(), Error> {
        let incompatible = |reason: String| Error::ArtifactIncompatible { reason };

        if self.format_version != FORMAT_VERSION {
            return Err(incompatible(format!(
                "format_version {} (this build reads {FORMAT_VERSION})",
                self.format_version
            )));
        }
        if self.vocabulary.is_empty() {
            return Err(incompatible("empty vocabulary".into()));
        }
        let unique: HashSet<&str> = self.vocabulary.iter().map(String::as_str).collect();
        if unique.len() != self.vocabulary.len() {
            return Err(incompatible("vocabulary contains duplicate terms".into()));
        }
        if self.topic_term_matrix.is_empty() {
            return Err(incompatible("topic-term matrix has no rows".into()));
        }
        for (t, row) in self.topic_term_matrix.iter().enumerate() {
            if row.len() != self.vocabulary.len() {
                return Err(incompatible(format!(
                    "topic {t} row has {} columns, vocabulary has {} terms",
                    row.len(),
                    self.vocabulary.len()
                )));
            }
            if let Some(i) = row.iter().position(|w| !w.is_finite() || *w < 0.0) {
                return Err(incompatible(format!(
                    "topic {t} weight for term {i} is {} (must be finite and >= 0)",
                    row[i]
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> TopicArtifact {
        TopicArtifact {
            format_version: FORMAT_VERSION,
            vocabulary: vec!["cat".into(), "dog".into()],
            topic_term_matrix: vec![vec![5.0, 4.0], vec![0.0, 1.0]],
        }
    }

    #[test]
    fn valid_artifact_passes() {
        assert!(toy().validate().is_ok());
    }

    #[test]
    fn wrong_version_is_incompatible() {
        let mut a = toy();
        a.format_version = 2;
        assert!(matches!(
            a.validate(),
            Err(Error::ArtifactIncompatible { .. })
        ));
    }

    #[test]
    fn ragged_matrix_is_incompatible() {
        let mut a = toy();
        a.topic_term_matrix[1] = vec![0.0];
        assert!(matches!(
            a.validate(),
            Err(Error::ArtifactIncompatible { .. })
        ));
    }

    #[test]
    fn negative_or_nan_weight_is_incompatible() {
        let mut a = toy();
        a.topic_term_matrix[0][1] = -1.0;
        assert!(a.validate().is_err());
        a.topic_term_matrix[0][1] = f64::NAN;
        assert!(a.validate().is_err());
    }

    #[test]
    fn duplicate_vocabulary_is_incompatible() {
        let mut a = toy();
        a.vocabulary[1] = "cat".into();
        assert!(a.validate().is_err());
    }
}
