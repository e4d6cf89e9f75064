//! Hedged quantities: "environ 10 jours", "about twenty", "~10".

use crate::error::NormalizeError;
use crate::lexicon::{HedgeEntry, Lexicon, Lexicons};
use crate::models::{ApproximatePayload, ExtractionMatch, Language, MatchPayload};
use crate::tokenizer::Tokens;

use super::{failed_run_end, parse_duration, parse_quantity};

/// Precision used by hedges whose lexicon entry leaves it unset.
pub const DEFAULT_FALLBACK_PRECISION: f64 = 0.10;

/// Detects a hedge phrase directly followed by a quantity.
pub struct ApproximateExpressionExtractor;

impl ApproximateExpressionExtractor {
    /// Returns every hedge + quantity phrase in `text`, ordered by position,
    /// using [`DEFAULT_FALLBACK_PRECISION`] for hedges without a precision.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedLanguage` if `lexicons` has no
    /// lexicon for `language`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::extractors::ApproximateExpressionExtractor;
    /// use tagnorm::lexicon::Lexicons;
    /// use tagnorm::Language;
    ///
    /// let matches = ApproximateExpressionExtractor::extract(
    ///     "Le projet prendra environ 10 jours.",
    ///     Language::French,
    ///     &Lexicons::builtin(),
    /// )
    /// .unwrap();
    /// let payload = matches[0].as_approximate().unwrap();
    /// assert_eq!(payload.value(), 10.0);
    /// assert_eq!(payload.precision(), 0.10);
    /// ```
    pub fn extract(
        text: &str,
        language: Language,
        lexicons: &Lexicons,
    ) -> Result<Vec<ExtractionMatch>, NormalizeError> {
        Self::extract_with_fallback(text, language, lexicons, DEFAULT_FALLBACK_PRECISION)
    }

    /// Like [`ApproximateExpressionExtractor::extract`] with an explicit fallback precision.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedLanguage` if `lexicons` has no
    /// lexicon for `language`.
    pub fn extract_with_fallback(
        text: &str,
        language: Language,
        lexicons: &Lexicons,
        fallback_precision: f64,
    ) -> Result<Vec<ExtractionMatch>, NormalizeError> {
        let lexicon = lexicons.get(language)?;
        Ok(Self::extract_with(text, lexicon, fallback_precision))
    }

    /// Extraction against an already resolved lexicon.
    pub fn extract_with(
        text: &str,
        lexicon: &Lexicon,
        fallback_precision: f64,
    ) -> Vec<ExtractionMatch> {
        let tokens = Tokens::new(text);
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let Some((hedge, quantity_start)) = match_hedge(&tokens, i, lexicon) else {
                i = failed_run_end(&tokens, i, lexicon).unwrap_or(i + 1);
                continue;
            };
            if !tokens.blank_between(quantity_start - 1, quantity_start) {
                i += 1;
                continue;
            }

            let precision = hedge.precision().unwrap_or(fallback_precision);
            let found = if let Some(phrase) = parse_duration(&tokens, quantity_start, lexicon) {
                let value = phrase.payload.value();
                Some((ApproximatePayload::new(value, precision, Some(phrase.payload)), phrase.end))
            } else {
                parse_quantity(&tokens, quantity_start, lexicon)
                    .map(|q| (ApproximatePayload::new(q.value, precision, None), q.end))
            };

            let Some((payload, end)) = found else {
                i = failed_run_end(&tokens, quantity_start, lexicon).unwrap_or(i + 1);
                continue;
            };

            if let (Some(span), Some(matched)) =
                (tokens.span(i, end - 1), tokens.text(i, end - 1))
            {
                matches.push(ExtractionMatch::new(
                    span,
                    matched,
                    MatchPayload::ApproximateExpression(payload),
                ));
            }
            i = end;
        }

        matches
    }
}

/// Matches the longest hedge phrase starting at token `start`.
///
/// Returns the entry and the index of the token right after the phrase.
fn match_hedge<'l>(
    tokens: &Tokens<'_>,
    start: usize,
    lexicon: &'l Lexicon,
) -> Option<(&'l HedgeEntry, usize)> {
    lexicon.hedges().iter().find_map(|hedge| {
        let words = hedge.words();
        let matched = words.iter().enumerate().all(|(offset, word)| {
            let index = start + offset;
            let same_word = tokens.get(index).is_some_and(|t| t.lower() == word.as_str());
            same_word && (offset == 0 || tokens.blank_between(index - 1, index))
        });
        matched.then_some((hedge, start + words.len()))
    })
}
