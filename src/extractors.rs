//! The three independent extractors.
//!
//! Each extractor is a stateless unit struct whose `extract` function maps
//! `(text, language, lexicons)` to an ordered, non-overlapping list of
//! matches of its own kind. They share the quantity and duration grammar
//! below but never call one another.

mod approximate;
mod textual_number;
mod time_unit;

pub use approximate::{ApproximateExpressionExtractor, DEFAULT_FALLBACK_PRECISION};
pub use textual_number::TextualNumberExtractor;
pub use time_unit::TimeUnitExtractor;

use crate::lexicon::Lexicon;
use crate::models::{DurationComponent, DurationPayload};
use crate::tokenizer::{TokenKind, Tokens};

/// A quantity found at a token position; `end` is the exclusive token index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quantity {
    pub value: f64,
    pub end: usize,
}

/// A duration phrase, possibly compound; `end` is the exclusive token index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DurationPhrase {
    pub payload: DurationPayload,
    pub end: usize,
}

/// Reads a digit quantity or a spelled-out number starting at token `start`.
pub(crate) fn parse_quantity(
    tokens: &Tokens<'_>,
    start: usize,
    lexicon: &Lexicon,
) -> Option<Quantity> {
    let token = tokens.get(start)?;
    match token.kind() {
        TokenKind::Number => Some(Quantity {
            value: token.number_value()?,
            end: start + 1,
        }),
        TokenKind::Word => {
            let run = textual_number::parse_run(tokens, start, lexicon)?;
            let value = run.value.ok()?;
            Some(Quantity {
                value: value as f64,
                end: run.end,
            })
        }
        TokenKind::Symbol => None,
    }
}

/// End of the number-word run starting at `start` when that run does not
/// compose.
///
/// Scanners jump past such a run so no tail of it is read as a quantity.
pub(crate) fn failed_run_end(
    tokens: &Tokens<'_>,
    start: usize,
    lexicon: &Lexicon,
) -> Option<usize> {
    let run = textual_number::parse_run(tokens, start, lexicon)?;
    run.value.is_err().then_some(run.end)
}

/// Reads `quantity unit` at `start`, then any `conjunction quantity unit`
/// continuations separated only by whitespace.
pub(crate) fn parse_duration(
    tokens: &Tokens<'_>,
    start: usize,
    lexicon: &Lexicon,
) -> Option<DurationPhrase> {
    let (first, mut end) = parse_component(tokens, start, lexicon)?;
    let mut components = vec![first];

    while let Some(conjunction) = tokens.get(end) {
        let joined = conjunction.kind() == TokenKind::Word
            && lexicon.is_conjunction(conjunction.lower())
            && tokens.blank_between(end - 1, end)
            && tokens.blank_between(end, end + 1);
        if !joined {
            break;
        }
        match parse_component(tokens, end + 1, lexicon) {
            Some((component, next)) => {
                components.push(component);
                end = next;
            }
            None => break,
        }
    }

    Some(DurationPhrase {
        payload: DurationPayload::new(components),
        end,
    })
}

fn parse_component(
    tokens: &Tokens<'_>,
    start: usize,
    lexicon: &Lexicon,
) -> Option<(DurationComponent, usize)> {
    let quantity = parse_quantity(tokens, start, lexicon)?;
    let unit_token = tokens.get(quantity.end)?;
    if unit_token.kind() != TokenKind::Word
        || !tokens.blank_between(quantity.end - 1, quantity.end)
    {
        return None;
    }
    let unit = lexicon.duration_unit(unit_token.lower())?;
    Some((DurationComponent::new(quantity.value, unit), quantity.end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DurationUnit;

    #[test]
    fn quantity_reads_digits_and_words() {
        let fr = Lexicon::french();
        let tokens = Tokens::new("12 vingt-deux");

        assert_eq!(parse_quantity(&tokens, 0, &fr), Some(Quantity { value: 12.0, end: 1 }));
        assert_eq!(parse_quantity(&tokens, 1, &fr), Some(Quantity { value: 22.0, end: 2 }));
    }

    #[test]
    fn duration_requires_a_unit_word() {
        let en = Lexicon::english();
        assert!(parse_duration(&Tokens::new("10 apples"), 0, &en).is_none());
        assert!(parse_duration(&Tokens::new("10, days"), 0, &en).is_none());
    }

    #[test]
    fn duration_merges_conjoined_components() {
        let en = Lexicon::english();
        let tokens = Tokens::new("2 weeks and 3 days and 4 hours");
        let phrase = parse_duration(&tokens, 0, &en).unwrap();

        assert_eq!(phrase.end, tokens.len());
        assert_eq!(phrase.payload.components().len(), 3);
        assert_eq!(phrase.payload.total_in_minutes(), 20_160.0 + 4_320.0 + 240.0);
    }

    #[test]
    fn failed_run_end_only_reports_uncomposable_runs() {
        let en = Lexicon::english();
        let tokens = Tokens::new("hundred hundred days and twenty days");

        assert_eq!(failed_run_end(&tokens, 0, &en), Some(2));
        assert_eq!(failed_run_end(&tokens, 2, &en), None);
        assert_eq!(failed_run_end(&tokens, 4, &en), None);
    }

    #[test]
    fn dangling_conjunction_is_left_out() {
        let fr = Lexicon::french();
        let tokens = Tokens::new("3 jours et demi");
        let phrase = parse_duration(&tokens, 0, &fr).unwrap();

        assert_eq!(phrase.end, 2);
        assert_eq!(phrase.payload.unit(), DurationUnit::Day);
    }
}
