use serde::{Deserialize, Serialize};
use std::fmt;

use super::Span;

/// Kind of expression an extractor detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    ApproximateExpression,
    TextualNumber,
    TimeUnit,
}

impl MatchKind {
    /// Rank used when matches from different extractors overlap; higher wins.
    pub fn priority(self) -> u8 {
        match self {
            Self::ApproximateExpression => 3,
            Self::TimeUnit => 2,
            Self::TextualNumber => 1,
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApproximateExpression => write!(f, "approximate_expression"),
            Self::TextualNumber => write!(f, "textual_number"),
            Self::TimeUnit => write!(f, "time_unit"),
        }
    }
}

/// Unit of a duration, with a fixed conversion to minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl DurationUnit {
    /// Minutes in one unit. A month is a nominal 30 days.
    pub fn minutes(self) -> f64 {
        match self {
            Self::Minute => 1.0,
            Self::Hour => 60.0,
            Self::Day => 1_440.0,
            Self::Week => 10_080.0,
            Self::Month => 43_200.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(value, unit)` pair of a duration phrase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationComponent {
    value: f64,
    unit: DurationUnit,
}

impl DurationComponent {
    /// Creates a component; negative or non-finite values are clamped to zero.
    pub fn new(value: f64, unit: DurationUnit) -> Self {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub fn in_minutes(&self) -> f64 {
        self.value * self.unit.minutes()
    }
}

/// A simple or compound duration ("10 jours", "1 hour and 30 minutes").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationPayload {
    components: Vec<DurationComponent>,
    total_in_minutes: f64,
}

impl DurationPayload {
    /// Builds a duration from its components and computes the minute total.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::{DurationComponent, DurationPayload, DurationUnit};
    ///
    /// let duration = DurationPayload::new(vec![
    ///     DurationComponent::new(1.0, DurationUnit::Hour),
    ///     DurationComponent::new(30.0, DurationUnit::Minute),
    /// ]);
    /// assert_eq!(duration.total_in_minutes(), 90.0);
    /// assert!(duration.is_compound());
    /// ```
    pub fn new(components: Vec<DurationComponent>) -> Self {
        let total_in_minutes = components.iter().map(DurationComponent::in_minutes).sum();
        Self {
            components,
            total_in_minutes,
        }
    }

    pub fn components(&self) -> &[DurationComponent] {
        &self.components
    }

    pub fn total_in_minutes(&self) -> f64 {
        self.total_in_minutes
    }

    pub fn is_compound(&self) -> bool {
        self.components.len() > 1
    }

    /// Headline value: the quantity of a simple duration, the minute total of a compound one.
    pub fn value(&self) -> f64 {
        match self.components.as_slice() {
            [single] => single.value(),
            _ => self.total_in_minutes,
        }
    }

    /// Headline unit, paired with [`DurationPayload::value`].
    pub fn unit(&self) -> DurationUnit {
        match self.components.as_slice() {
            [single] => single.unit(),
            _ => DurationUnit::Minute,
        }
    }
}

/// Hedged quantity ("environ 10 jours", "about twenty").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproximatePayload {
    value: f64,
    precision: f64,
    duration: Option<DurationPayload>,
}

impl ApproximatePayload {
    /// Creates a payload; precision is clamped to `[0, 1]` and the value to non-negative.
    pub fn new(value: f64, precision: f64, duration: Option<DurationPayload>) -> Self {
        Self {
            value: value.max(0.0),
            precision: precision.clamp(0.0, 1.0),
            duration,
        }
    }

    /// The hedged quantity as written.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Fractional uncertainty implied by the hedge word.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Duration absorbed after the quantity, if any.
    pub fn duration(&self) -> Option<&DurationPayload> {
        self.duration.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextualNumberPayload {
    numeric_value: u64,
}

impl TextualNumberPayload {
    pub fn new(numeric_value: u64) -> Self {
        Self { numeric_value }
    }

    pub fn numeric_value(&self) -> u64 {
        self.numeric_value
    }
}

/// Kind-specific data carried by a match, one variant per [`MatchKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchPayload {
    ApproximateExpression(ApproximatePayload),
    TextualNumber(TextualNumberPayload),
    TimeUnit(DurationPayload),
}

impl MatchPayload {
    pub fn kind(&self) -> MatchKind {
        match self {
            Self::ApproximateExpression(_) => MatchKind::ApproximateExpression,
            Self::TextualNumber(_) => MatchKind::TextualNumber,
            Self::TimeUnit(_) => MatchKind::TimeUnit,
        }
    }
}

/// A detected expression: where it is, what it says, and what it means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMatch {
    span: Span,
    matched_text: String,
    payload: MatchPayload,
}

impl ExtractionMatch {
    pub fn new(span: Span, matched_text: impl Into<String>, payload: MatchPayload) -> Self {
        Self {
            span,
            matched_text: matched_text.into(),
            payload,
        }
    }

    pub fn kind(&self) -> MatchKind {
        self.payload.kind()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The exact substring of the original text covered by the span.
    pub fn matched_text(&self) -> &str {
        &self.matched_text
    }

    pub fn payload(&self) -> &MatchPayload {
        &self.payload
    }

    pub fn as_approximate(&self) -> Option<&ApproximatePayload> {
        match &self.payload {
            MatchPayload::ApproximateExpression(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_textual_number(&self) -> Option<&TextualNumberPayload> {
        match &self.payload {
            MatchPayload::TextualNumber(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_time_unit(&self) -> Option<&DurationPayload> {
        match &self.payload {
            MatchPayload::TimeUnit(p) => Some(p),
            _ => None,
        }
    }
}
