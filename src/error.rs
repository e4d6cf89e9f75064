use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by tag normalization.
///
/// Extractor-local anomalies (a number-word run that does not compose, for
/// instance) never reach this type; they degrade to "no match".
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The requested language has no lexicon, or the code is not recognized.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The evaluation corpus could not be read.
    #[error("Failed to read corpus {}: {source}", path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The evaluation corpus is not valid JSON for `CorpusEntry`.
    #[error("Invalid corpus format: {0}")]
    CorpusFormat(#[source] serde_json::Error),
}

impl NormalizeError {
    /// Returns true for errors caused by caller input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage(_))
    }
}
