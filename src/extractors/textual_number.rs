//! Spelled-out numbers: "vingt-cinq", "quatre-vingt-dix-neuf",
//! "two hundred and five".
//!
//! A run is the longest sequence of number words (and connectors between
//! them) separated only by whitespace. The run is delimited first and then
//! composed; a run that does not compose is dropped whole. A run made of a
//! single ambiguous word ("une", "neuf") is not reported.

use thiserror::Error;
use tracing::trace;

use crate::error::NormalizeError;
use crate::lexicon::{Lexicon, Lexicons, NumberWord};
use crate::models::{ExtractionMatch, Language, MatchPayload, TextualNumberPayload};
use crate::tokenizer::{TokenKind, Tokens};

/// Why a number-word run failed to compose. Never leaves this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum CompositionError {
    #[error("run holds no number word")]
    Empty,
    #[error("word cannot follow the previous one")]
    UnexpectedWord,
    #[error("magnitude repeated or out of order")]
    RepeatedMagnitude,
    #[error("value overflows u64")]
    Overflow,
}

/// A delimited run of number words; `end` is the exclusive token index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NumberRun {
    pub value: Result<u64, CompositionError>,
    pub end: usize,
}

/// Detects numbers spelled out in words.
pub struct TextualNumberExtractor;

impl TextualNumberExtractor {
    /// Returns every composable number-word run in `text`, ordered by position.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedLanguage` if `lexicons` has no
    /// lexicon for `language`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::extractors::TextualNumberExtractor;
    /// use tagnorm::lexicon::Lexicons;
    /// use tagnorm::Language;
    ///
    /// let lexicons = Lexicons::builtin();
    /// let matches =
    ///     TextualNumberExtractor::extract("vingt-cinq tickets", Language::French, &lexicons)
    ///         .unwrap();
    /// assert_eq!(matches[0].as_textual_number().unwrap().numeric_value(), 25);
    /// assert_eq!(matches[0].matched_text(), "vingt-cinq");
    /// ```
    pub fn extract(
        text: &str,
        language: Language,
        lexicons: &Lexicons,
    ) -> Result<Vec<ExtractionMatch>, NormalizeError> {
        let lexicon = lexicons.get(language)?;
        Ok(Self::extract_with(text, lexicon))
    }

    /// Same as [`TextualNumberExtractor::extract`] against an already resolved lexicon.
    pub fn extract_with(text: &str, lexicon: &Lexicon) -> Vec<ExtractionMatch> {
        let tokens = Tokens::new(text);
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let Some(run) = parse_run(&tokens, i, lexicon) else {
                i += 1;
                continue;
            };

            let ambiguous = run.end == i + 1
                && tokens.get(i).is_some_and(|t| lexicon.is_ambiguous(t.lower()));

            match run.value {
                Ok(_) if ambiguous => {
                    trace!(
                        word = tokens.text(i, i).unwrap_or_default(),
                        "skipping standalone ambiguous number word"
                    );
                }
                Ok(value) => {
                    if let (Some(span), Some(matched)) =
                        (tokens.span(i, run.end - 1), tokens.text(i, run.end - 1))
                    {
                        matches.push(ExtractionMatch::new(
                            span,
                            matched,
                            MatchPayload::TextualNumber(TextualNumberPayload::new(value)),
                        ));
                    }
                }
                Err(err) => {
                    trace!(
                        run = tokens.text(i, run.end - 1).unwrap_or_default(),
                        %err,
                        "discarding number-word run"
                    );
                }
            }
            i = run.end;
        }

        matches
    }
}

/// Delimits the number-word run starting at `start` and composes it.
///
/// Returns `None` when `start` does not begin a run. Connectors are only
/// kept when another number word follows them.
pub(crate) fn parse_run(tokens: &Tokens<'_>, start: usize, lexicon: &Lexicon) -> Option<NumberRun> {
    let mut words: Vec<NumberWord> = Vec::new();
    let mut committed = 0;
    let mut end = None;
    let mut i = start;

    while let Some(token) = tokens.get(i) {
        if token.kind() != TokenKind::Word || (i > start && !tokens.blank_between(i - 1, i)) {
            break;
        }
        let Some(parts) = split_number_word(token.lower(), lexicon) else {
            break;
        };
        let only_connectors = parts.iter().all(|w| *w == NumberWord::Connector);
        if only_connectors && words.is_empty() {
            break;
        }
        words.extend(parts);
        i += 1;
        if !only_connectors {
            committed = words.len();
            end = Some(i);
        }
    }

    let end = end?;
    words.truncate(committed);
    Some(NumberRun {
        value: compose(&words, lexicon),
        end,
    })
}

/// Resolves one token into number words, splitting hyphenated compounds
/// greedily so listed forms ("dix-sept") win over their parts.
fn split_number_word(word: &str, lexicon: &Lexicon) -> Option<Vec<NumberWord>> {
    if let Some(found) = lexicon.number_word(word) {
        return Some(vec![found]);
    }

    let parts: Vec<&str> = word.split('-').collect();
    if parts.len() < 2 {
        return None;
    }

    let mut words = Vec::new();
    let mut idx = 0;
    while idx < parts.len() {
        let (found, next) = (idx + 1..=parts.len())
            .rev()
            .find_map(|j| lexicon.number_word(&parts[idx..j].join("-")).map(|w| (w, j)))?;
        words.push(found);
        idx = next;
    }
    Some(words)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Unit(u64),
    Tens,
    Hundred,
    Scale,
}

/// Composes number words positionally.
///
/// `total` holds finished scale groups; `hundreds` and `rest` the group in
/// progress.
fn compose(words: &[NumberWord], lexicon: &Lexicon) -> Result<u64, CompositionError> {
    let mut total: u64 = 0;
    let mut hundreds: u64 = 0;
    let mut rest: u64 = 0;
    let mut last = Last::Start;
    let mut last_scale: Option<u64> = None;
    let mut seen = false;

    for &word in words {
        match word {
            NumberWord::Connector => continue,
            NumberWord::Unit(u) => {
                match last {
                    Last::Start | Last::Hundred | Last::Scale => rest = u,
                    Last::Tens => {
                        let teen = (10..=19).contains(&u) && lexicon.accepts_teen_after(rest);
                        if !(1..=9).contains(&u) && !teen {
                            return Err(CompositionError::UnexpectedWord);
                        }
                        rest += u;
                    }
                    Last::Unit(_) => return Err(CompositionError::UnexpectedWord),
                }
                last = Last::Unit(u);
            }
            NumberWord::Tens(t) => {
                match last {
                    Last::Start | Last::Hundred | Last::Scale => rest = t,
                    Last::Unit(u) if rest == u && lexicon.multiplies_tens(u, t) => rest = u * t,
                    _ => return Err(CompositionError::UnexpectedWord),
                }
                last = Last::Tens;
            }
            NumberWord::Hundred => {
                if hundreds != 0 || last == Last::Hundred {
                    return Err(CompositionError::RepeatedMagnitude);
                }
                let multiplier = if rest == 0 { 1 } else { rest };
                hundreds = multiplier
                    .checked_mul(100)
                    .ok_or(CompositionError::Overflow)?;
                rest = 0;
                last = Last::Hundred;
            }
            NumberWord::Scale(scale) => {
                if last_scale.is_some_and(|previous| scale >= previous) {
                    return Err(CompositionError::RepeatedMagnitude);
                }
                let group = hundreds + rest;
                let multiplier = if group == 0 { 1 } else { group };
                let value = multiplier
                    .checked_mul(scale)
                    .ok_or(CompositionError::Overflow)?;
                total = total.checked_add(value).ok_or(CompositionError::Overflow)?;
                hundreds = 0;
                rest = 0;
                last_scale = Some(scale);
                last = Last::Scale;
            }
        }
        seen = true;
    }

    if !seen {
        return Err(CompositionError::Empty);
    }
    total
        .checked_add(hundreds + rest)
        .ok_or(CompositionError::Overflow)
}
