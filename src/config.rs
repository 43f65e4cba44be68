use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// path has a default, so the CLI works out of the box against a
/// conventionally named model directory.
pub struct Config {
    /// Where the fitted model artifact lives (TOPICAL_MODEL_PATH).
    pub model_path: PathBuf,
    /// Article dataset for batch scoring (TOPICAL_DATA_PATH).
    pub data_path: PathBuf,
    /// Optional override for the embedded lemma exceptions table
    /// (TOPICAL_LEMMA_EXCEPTIONS). When set, the file must exist and
    /// parse — startup fails otherwise.
    pub lemma_exceptions: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            model_path: env::var("TOPICAL_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./model/topic_model.json")),
            data_path: env::var("TOPICAL_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/articles.json")),
            lemma_exceptions: env::var("TOPICAL_LEMMA_EXCEPTIONS").ok().map(PathBuf::from),
        })
    }
}
