//! Normalization of free-form planning tags.
//!
//! Detects hedged quantities ("environ 10 jours"), numbers spelled out in
//! words ("vingt-cinq") and durations ("1 hour and 30 minutes") in French or
//! English tags, rewrites them canonically and reports what was found.

pub mod error;
pub mod extractors;
pub mod lexicon;
pub mod models;
pub mod normalizer;
pub mod tokenizer;

pub use error::NormalizeError;
pub use models::{
    ApproximatePayload, DurationComponent, DurationPayload, DurationUnit, ExtractionMatch, Language,
    MatchKind, MatchPayload, NormalizationRecord, NormalizedTag, Span, TagInput,
    TextualNumberPayload,
};
pub use normalizer::{NormalizerConfig, TagNormalizer, TagNormalizerBuilder};
