//! Tag normalization: run the extractors, resolve overlaps, rewrite.
//!
//! # Examples
//!
//! ```
//! use tagnorm::normalizer::{NormalizerConfig, TagNormalizer};
//! use tagnorm::Language;
//!
//! let normalizer = TagNormalizer::builder()
//!     .config(NormalizerConfig::default())
//!     .build();
//!
//! let tag = normalizer
//!     .normalize_tag("about 1 hour and 30 minutes", Language::English)
//!     .unwrap();
//! assert_eq!(tag.normalized_text(), "≈90min");
//!
//! let record = tag.to_record();
//! assert_eq!(record.metadata.approximate_expressions[0].info.value, 90.0);
//! ```
//!
//! ## Evaluation corpus
//!
//! `tests/fixtures/normalization_corpus.json` lists tags with their expected
//! normalized text. [`load_corpus`] reads it and [`evaluate_corpus`] reports
//! every mismatch, which is the quickest way to check a lexicon change.

mod config;
mod eval;
mod render;
mod resolve;
mod tag_normalizer;

pub use config::{DEFAULT_APPROXIMATE_PREFIX, DEFAULT_DURATION_SUFFIX, NormalizerConfig};
pub use eval::{CorpusEntry, CorpusFailure, CorpusReport, evaluate_corpus, load_corpus};
pub use render::{format_quantity, render_match, rewrite};
pub use resolve::resolve_overlaps;
pub use tag_normalizer::{TagNormalizer, TagNormalizerBuilder};
