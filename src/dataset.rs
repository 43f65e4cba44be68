// Dataset source for batch scoring — an ordered collection of raw article
// texts loaded once from a JSON flat file.
//
// Accepts either a bare array of strings or an object with an "articles"
// key, so exported dataframes and hand-written fixtures both work.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Articles(Vec<String>),
    Wrapped { articles: Vec<String> },
}

/// Positionally indexed article texts.
pub struct Dataset {
    articles: Vec<String>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read dataset from {}", path.display()))?;
        let parsed: DatasetFile = serde_json::from_str(&raw)
            .with_context(|| format!("dataset {} is not a JSON article list", path.display()))?;
        let articles = match parsed {
            DatasetFile::Articles(articles) | DatasetFile::Wrapped { articles } => articles,
        };
        info!(articles = articles.len(), path = %path.display(), "Loaded dataset");
        Ok(Self { articles })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// The article at position `index`, with a descriptive error naming
    /// the valid range when out of bounds.
    pub fn article(&self, index: usize) -> Result<&str> {
        self.articles
            .get(index)
            .map(String::as_str)
            .with_context(|| {
                format!(
                    "article number {index} is out of range: dataset has {} articles (0..{})",
                    self.articles.len(),
                    self.articles.len().saturating_sub(1)
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_bare_array() {
        let f = write_dataset(r#"["first article", "second article"]"#);
        let ds = Dataset::load(f.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.article(1).unwrap(), "second article");
    }

    #[test]
    fn loads_wrapped_object() {
        let f = write_dataset(r#"{"articles": ["only one"]}"#);
        let ds = Dataset::load(f.path()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn out_of_range_index_names_the_range() {
        let f = write_dataset(r#"["a"]"#);
        let ds = Dataset::load(f.path()).unwrap();
        let err = ds.article(5).unwrap_err().to_string();
        assert!(err.contains("out of range"));
        assert!(err.contains("1 articles"));
    }

    #[test]
    fn malformed_json_fails() {
        let f = write_dataset("not json at all");
        assert!(Dataset::load(f.path()).is_err());
    }
}
