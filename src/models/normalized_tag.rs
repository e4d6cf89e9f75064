use serde::{Deserialize, Serialize};

use super::{
    ApproximateEntry, ApproximateInfo, ComponentEntry, ExtractionMatch, Language, MatchKind,
    Metadata, NormalizationRecord, TextualNumberEntry, TimeUnitEntry, TimeUnitInfo,
};

/// A tag to normalize, with the language code supplied by the caller.
///
/// The code is kept as a string so that batch callers can pass unvalidated
/// input; unsupported codes degrade to an unchanged tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInput {
    pub text: String,
    pub language: String,
}

impl TagInput {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }

    pub fn with_language(text: impl Into<String>, language: Language) -> Self {
        Self::new(text, language.code())
    }
}

/// Result of normalizing one tag.
///
/// Matches keep their original spans and text and are ordered by start offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTag {
    original_text: String,
    normalized_text: String,
    matches: Vec<ExtractionMatch>,
}

impl NormalizedTag {
    pub fn new(
        original_text: impl Into<String>,
        normalized_text: impl Into<String>,
        mut matches: Vec<ExtractionMatch>,
    ) -> Self {
        matches.sort_by_key(|m| m.span().start());
        Self {
            original_text: original_text.into(),
            normalized_text: normalized_text.into(),
            matches,
        }
    }

    /// A tag left as-is, with no matches.
    pub fn unchanged(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            normalized_text: text.clone(),
            original_text: text,
            matches: Vec::new(),
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn is_changed(&self) -> bool {
        self.original_text != self.normalized_text
    }

    /// All retained matches, ordered by start offset.
    pub fn matches(&self) -> &[ExtractionMatch] {
        &self.matches
    }

    pub fn matches_of(&self, kind: MatchKind) -> impl Iterator<Item = &ExtractionMatch> {
        self.matches.iter().filter(move |m| m.kind() == kind)
    }

    pub fn approximate_expressions(&self) -> impl Iterator<Item = &ExtractionMatch> {
        self.matches_of(MatchKind::ApproximateExpression)
    }

    pub fn textual_numbers(&self) -> impl Iterator<Item = &ExtractionMatch> {
        self.matches_of(MatchKind::TextualNumber)
    }

    pub fn time_units(&self) -> impl Iterator<Item = &ExtractionMatch> {
        self.matches_of(MatchKind::TimeUnit)
    }

    /// Converts to the external record shape, grouping matches by kind.
    pub fn to_record(&self) -> NormalizationRecord {
        let approximate_expressions = self
            .approximate_expressions()
            .filter_map(|m| {
                let payload = m.as_approximate()?;
                Some(ApproximateEntry {
                    expression: m.matched_text().to_string(),
                    info: ApproximateInfo {
                        value: payload.value(),
                        precision: payload.precision(),
                        unit: payload.duration().map(|d| d.unit()),
                        total_in_minutes: payload.duration().map(|d| d.total_in_minutes()),
                    },
                })
            })
            .collect();

        let textual_numbers = self
            .textual_numbers()
            .filter_map(|m| {
                let payload = m.as_textual_number()?;
                Some(TextualNumberEntry {
                    textual_number: m.matched_text().to_string(),
                    numeric_value: payload.numeric_value(),
                })
            })
            .collect();

        let time_units = self
            .time_units()
            .filter_map(|m| {
                let duration = m.as_time_unit()?;
                let components = if duration.is_compound() {
                    duration
                        .components()
                        .iter()
                        .map(|c| ComponentEntry {
                            value: c.value(),
                            unit: c.unit(),
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                Some(TimeUnitEntry {
                    expression: m.matched_text().to_string(),
                    info: TimeUnitInfo {
                        value: duration.value(),
                        unit: duration.unit(),
                        components,
                        total_in_minutes: duration.total_in_minutes(),
                    },
                })
            })
            .collect();

        NormalizationRecord {
            normalized_tag: self.normalized_text.clone(),
            metadata: Metadata {
                approximate_expressions,
                textual_numbers,
                time_units,
            },
        }
    }
}
