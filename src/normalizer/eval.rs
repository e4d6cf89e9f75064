//! Fixture corpus of tags with their expected normalized text.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::models::TagInput;

use super::TagNormalizer;

/// Test corpus entry structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// The tag to normalize.
    pub text: String,
    /// Language code, passed through unvalidated.
    pub language: String,
    /// Expected normalized text.
    pub expected_normalized: String,
    /// Notes about this test case.
    pub notes: String,
}

/// One entry whose normalized text differed from the expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFailure {
    pub index: usize,
    pub text: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of running a corpus through a normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusReport {
    pub total: usize,
    pub failures: Vec<CorpusFailure>,
}

impl CorpusReport {
    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }

    /// Share of entries that matched, 1.0 for an empty corpus.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.passed() as f64 / self.total as f64
        }
    }
}

/// Loads the corpus from the fixtures directory.
///
/// # Arguments
///
/// * `corpus_path` - Optional path to corpus file. If None, uses default location.
///
/// # Errors
///
/// Returns `NormalizeError::Corpus` if the file cannot be read and
/// `NormalizeError::CorpusFormat` if it is not a JSON array of entries.
///
/// # Examples
///
/// ```no_run
/// use tagnorm::normalizer::load_corpus;
///
/// let entries = load_corpus(None)?;
/// for entry in entries {
///     println!("{} -> {}", entry.text, entry.expected_normalized);
/// }
/// # Ok::<(), tagnorm::NormalizeError>(())
/// ```
pub fn load_corpus(corpus_path: Option<PathBuf>) -> Result<Vec<CorpusEntry>, NormalizeError> {
    let path = corpus_path.unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("normalization_corpus.json")
    });

    let content = fs::read_to_string(&path).map_err(|source| NormalizeError::Corpus {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(NormalizeError::CorpusFormat)
}

/// Normalizes every entry and collects the mismatches.
pub fn evaluate_corpus(normalizer: &TagNormalizer, entries: &[CorpusEntry]) -> CorpusReport {
    let inputs: Vec<TagInput> = entries
        .iter()
        .map(|e| TagInput::new(e.text.clone(), e.language.clone()))
        .collect();

    let failures = normalizer
        .normalize_tags(&inputs)
        .into_iter()
        .zip(entries)
        .enumerate()
        .filter(|(_, (tag, entry))| tag.normalized_text() != entry.expected_normalized)
        .map(|(index, (tag, entry))| CorpusFailure {
            index,
            text: entry.text.clone(),
            expected: entry.expected_normalized.clone(),
            actual: tag.normalized_text().to_string(),
        })
        .collect();

    CorpusReport {
        total: entries.len(),
        failures,
    }
}
