// Text normalization — the first stage of the inference pipeline.
//
// Raw article text becomes a sequence of canonical tokens: Unicode word
// segments, lowercased, lemmatized, and filtered down to alphabetic lemmas
// of three or more characters. The fitted vectorizer saw exactly this
// normalization at training time, so it must stay byte-for-byte
// deterministic here.

use unicode_segmentation::UnicodeSegmentation;

pub mod lemma;

pub use lemma::Lemmatizer;

/// Minimum lemma length a token must have to survive filtering.
pub const MIN_TOKEN_LEN: usize = 3;

/// Normalize raw text into canonical tokens.
///
/// Order is preserved and duplicates are retained — downstream counting
/// depends on frequency. Pure function of the input and the lemmatizer.
pub fn normalize(text: &str, lemmatizer: &Lemmatizer) -> Vec<String> {
    text.unicode_words()
        .map(|word| lemmatizer.lemma(&word.to_lowercase()))
        .filter(|lemma| {
            lemma.chars().count() >= MIN_TOKEN_LEN && lemma.chars().all(char::is_alphabetic)
        })
        .collect()
}
