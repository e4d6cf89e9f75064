//! External record shape: `{normalized_tag, metadata}` with PascalCase entry keys.

use serde::{Deserialize, Serialize};

use super::DurationUnit;

/// Normalized tag plus its metadata, ready for JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationRecord {
    pub normalized_tag: String,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub approximate_expressions: Vec<ApproximateEntry>,
    pub textual_numbers: Vec<TextualNumberEntry>,
    pub time_units: Vec<TimeUnitEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApproximateEntry {
    pub expression: String,
    pub info: ApproximateInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApproximateInfo {
    pub value: f64,
    pub precision: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<DurationUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_in_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextualNumberEntry {
    pub textual_number: String,
    pub numeric_value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeUnitEntry {
    pub expression: String,
    pub info: TimeUnitInfo,
}

/// Duration details. `components` is only filled for compound durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeUnitInfo {
    pub value: f64,
    pub unit: DurationUnit,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentEntry>,
    pub total_in_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentEntry {
    pub value: f64,
    pub unit: DurationUnit,
}
