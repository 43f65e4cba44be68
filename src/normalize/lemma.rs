// English lemmatizer: irregular-form exceptions table + ordered suffix
// detachment rules (the classic morphy noun rules).
//
// The exceptions table is the startup-time resource the normalizer depends
// on. A default table is embedded in the binary; an on-disk override can be
// supplied via config, and if it is supplied it must exist and parse —
// a missing resource is a fatal startup error, never a per-call one.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Detachment rules tried longest-suffix-first. The first matching rule
/// wins; words already in base form fall through unchanged.
const NOUN_RULES: [(&str, &str); 7] = [
    ("ches", "ch"),
    ("shes", "sh"),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("s", ""),
];

/// Reduces an inflected English word to its dictionary base form.
///
/// Immutable after construction, so one instance can be shared across
/// concurrent inference calls without locking.
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
}

impl Lemmatizer {
    /// Build a lemmatizer from the exceptions table embedded at compile time.
    pub fn embedded() -> Result<Self> {
        Self::parse(include_str!("../../assets/lemma_exceptions.tsv"))
            .context("embedded lemma exceptions table is malformed")
    }

    /// Build a lemmatizer from an on-disk exceptions table.
    ///
    /// Fails if the file is missing or any line is not `form<TAB>lemma`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read lemma exceptions from {}", path.display()))?;
        let lemmatizer = Self::parse(&raw)
            .with_context(|| format!("malformed lemma exceptions table {}", path.display()))?;
        debug!(
            entries = lemmatizer.exceptions.len(),
            path = %path.display(),
            "Loaded lemma exceptions table"
        );
        Ok(lemmatizer)
    }

    fn parse(raw: &str) -> Result<Self> {
        let mut exceptions = HashMap::new();
        for (lineno, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (form, lemma) = line
                .split_once('\t')
                .with_context(|| format!("line {}: expected form<TAB>lemma", lineno + 1))?;
            exceptions.insert(form.trim().to_string(), lemma.trim().to_string());
        }
        Ok(Self { exceptions })
    }

    /// Return the base form of `word`. Expects lowercased input.
    ///
    /// Exceptions take priority over rules; a word no rule matches is
    /// already its own lemma.
    pub fn lemma(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        for (suffix, replacement) in NOUN_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                // "ses" only applies after a consonant (glasses, lenses);
                // vowel stems (houses, cases) are plain e-stem plurals and
                // fall through to the bare "s" rule.
                if suffix == "ses" && stem.ends_with(|c| "aeiou".contains(c)) {
                    continue;
                }
                // Bare "s" stripping has false positives the other rules
                // don't: leave -ss, -us, -is words (glass, virus, basis)
                // and words with no real stem left.
                if suffix == "s"
                    && (stem.len() < 3
                        || stem.ends_with('s')
                        || stem.ends_with('u')
                        || stem.ends_with('i'))
                {
                    continue;
                }
                return format!("{stem}{replacement}");
            }
        }

        word.to_string()
    }
}
