//! Canonical renderings and the left-to-right rewrite of a tag.

use crate::models::{ExtractionMatch, MatchPayload};

use super::NormalizerConfig;

/// Formats a quantity without a trailing `.0` for whole values.
///
/// # Examples
///
/// ```
/// use tagnorm::normalizer::format_quantity;
///
/// assert_eq!(format_quantity(14700.0), "14700");
/// assert_eq!(format_quantity(1.5), "1.5");
/// ```
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Canonical text substituted for one match.
///
/// - textual number: its digits (`vingt-cinq` → `25`)
/// - time unit: minute total (`1 heure et 30 minutes` → `90min`)
/// - approximate: prefix + value, or prefix + minute total when a duration
///   was absorbed (`environ 10 jours` → `≈14400min`)
pub fn render_match(m: &ExtractionMatch, config: &NormalizerConfig) -> String {
    match m.payload() {
        MatchPayload::TextualNumber(p) => p.numeric_value().to_string(),
        MatchPayload::TimeUnit(d) => {
            format!("{}{}", format_quantity(d.total_in_minutes()), config.duration_suffix)
        }
        MatchPayload::ApproximateExpression(p) => match p.duration() {
            Some(d) => format!(
                "{}{}{}",
                config.approximate_prefix,
                format_quantity(d.total_in_minutes()),
                config.duration_suffix
            ),
            None => format!("{}{}", config.approximate_prefix, format_quantity(p.value())),
        },
    }
}

/// Rebuilds `text` with each match's span replaced by its rendering.
///
/// `matches` must be non-overlapping. Text outside every match is copied
/// verbatim; a match whose span falls outside `text` is ignored.
pub fn rewrite(text: &str, matches: &[ExtractionMatch], config: &NormalizerConfig) -> String {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut ordered: Vec<&ExtractionMatch> = matches.iter().collect();
    ordered.sort_by_key(|m| m.span().start());

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for m in ordered {
        let (Some(&start), Some(&end)) = (
            boundaries.get(m.span().start()),
            boundaries.get(m.span().end()),
        ) else {
            continue;
        };
        if start < cursor {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(&render_match(m, config));
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
