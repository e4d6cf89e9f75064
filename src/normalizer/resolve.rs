use std::cmp::Ordering;

use tracing::trace;

use crate::models::ExtractionMatch;

/// Keeps a pairwise non-overlapping subset of `candidates`.
///
/// Candidates are considered by kind priority (approximate expression, then
/// time unit, then textual number), then earliest start, then longest span.
/// A candidate overlapping an already retained match is dropped. The result
/// is ordered by start offset.
pub fn resolve_overlaps(mut candidates: Vec<ExtractionMatch>) -> Vec<ExtractionMatch> {
    candidates.sort_by(precedence);

    let mut retained: Vec<ExtractionMatch> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if let Some(winner) = retained.iter().find(|r| r.span().overlaps(candidate.span())) {
            trace!(
                dropped = candidate.matched_text(),
                dropped_kind = %candidate.kind(),
                kept = winner.matched_text(),
                kept_kind = %winner.kind(),
                "overlapping match dropped"
            );
            continue;
        }
        retained.push(candidate);
    }

    retained.sort_by_key(|m| m.span().start());
    retained
}

fn precedence(a: &ExtractionMatch, b: &ExtractionMatch) -> Ordering {
    b.kind()
        .priority()
        .cmp(&a.kind().priority())
        .then_with(|| a.span().start().cmp(&b.span().start()))
        .then_with(|| b.span().len().cmp(&a.span().len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ApproximatePayload, DurationComponent, DurationPayload, DurationUnit, MatchKind,
        MatchPayload, Span, TextualNumberPayload,
    };

    fn number(start: usize, end: usize) -> ExtractionMatch {
        ExtractionMatch::new(
            Span::new(start, end),
            "n",
            MatchPayload::TextualNumber(TextualNumberPayload::new(1)),
        )
    }

    fn duration(start: usize, end: usize) -> ExtractionMatch {
        ExtractionMatch::new(
            Span::new(start, end),
            "d",
            MatchPayload::TimeUnit(DurationPayload::new(vec![DurationComponent::new(
                1.0,
                DurationUnit::Day,
            )])),
        )
    }

    fn approximate(start: usize, end: usize) -> ExtractionMatch {
        ExtractionMatch::new(
            Span::new(start, end),
            "a",
            MatchPayload::ApproximateExpression(ApproximatePayload::new(1.0, 0.1, None)),
        )
    }

    #[test]
    fn approximate_wins_over_contained_time_unit() {
        let retained = resolve_overlaps(vec![duration(8, 16), approximate(0, 16)]);

        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].kind(), MatchKind::ApproximateExpression);
    }

    #[test]
    fn time_unit_wins_over_contained_textual_number() {
        let retained = resolve_overlaps(vec![number(0, 5), duration(0, 11)]);

        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].kind(), MatchKind::TimeUnit);
    }

    #[test]
    fn same_kind_prefers_earliest_then_longest() {
        let retained = resolve_overlaps(vec![number(3, 9), number(2, 4), number(2, 6)]);

        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].span(), Span::new(2, 6));
    }

    #[test]
    fn disjoint_matches_are_all_kept_in_order() {
        let retained = resolve_overlaps(vec![number(20, 25), approximate(0, 10), duration(11, 19)]);

        let starts: Vec<usize> = retained.iter().map(|m| m.span().start()).collect();
        assert_eq!(starts, vec![0, 11, 20]);
    }

    #[test]
    fn result_is_pairwise_disjoint() {
        let retained = resolve_overlaps(vec![
            number(0, 4),
            duration(2, 8),
            approximate(6, 12),
            number(11, 14),
            duration(13, 20),
        ]);

        for (i, a) in retained.iter().enumerate() {
            for b in &retained[i + 1..] {
                assert!(!a.span().overlaps(b.span()));
            }
        }
    }
}
