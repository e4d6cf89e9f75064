mod extraction_match;
mod language;
mod normalized_tag;
mod record;
mod span;

pub use extraction_match::{
    ApproximatePayload, DurationComponent, DurationPayload, DurationUnit, ExtractionMatch,
    MatchKind, MatchPayload, TextualNumberPayload,
};
pub use language::Language;
pub use normalized_tag::{NormalizedTag, TagInput};
pub use record::{
    ApproximateEntry, ApproximateInfo, ComponentEntry, Metadata, NormalizationRecord,
    TextualNumberEntry, TimeUnitEntry, TimeUnitInfo,
};
pub use span::Span;
