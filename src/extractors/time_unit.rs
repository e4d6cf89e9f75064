//! Durations: a quantity followed by a unit word, with conjoined phrases
//! ("1 heure et 30 minutes") merged into one compound match.

use crate::error::NormalizeError;
use crate::lexicon::{Lexicon, Lexicons};
use crate::models::{ExtractionMatch, Language, MatchPayload};
use crate::tokenizer::Tokens;

use super::{failed_run_end, parse_duration};

/// Detects quantity + unit phrases.
pub struct TimeUnitExtractor;

impl TimeUnitExtractor {
    /// Returns every duration phrase in `text`, ordered by position.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedLanguage` if `lexicons` has no
    /// lexicon for `language`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::extractors::TimeUnitExtractor;
    /// use tagnorm::lexicon::Lexicons;
    /// use tagnorm::Language;
    ///
    /// let matches = TimeUnitExtractor::extract(
    ///     "1 hour and 30 minutes",
    ///     Language::English,
    ///     &Lexicons::builtin(),
    /// )
    /// .unwrap();
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].as_time_unit().unwrap().total_in_minutes(), 90.0);
    /// ```
    pub fn extract(
        text: &str,
        language: Language,
        lexicons: &Lexicons,
    ) -> Result<Vec<ExtractionMatch>, NormalizeError> {
        let lexicon = lexicons.get(language)?;
        Ok(Self::extract_with(text, lexicon))
    }

    /// Same as [`TimeUnitExtractor::extract`] against an already resolved lexicon.
    pub fn extract_with(text: &str, lexicon: &Lexicon) -> Vec<ExtractionMatch> {
        let tokens = Tokens::new(text);
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let Some(phrase) = parse_duration(&tokens, i, lexicon) else {
                i = failed_run_end(&tokens, i, lexicon).unwrap_or(i + 1);
                continue;
            };

            if let (Some(span), Some(matched)) =
                (tokens.span(i, phrase.end - 1), tokens.text(i, phrase.end - 1))
            {
                matches.push(ExtractionMatch::new(
                    span,
                    matched,
                    MatchPayload::TimeUnit(phrase.payload),
                ));
            }
            i = phrase.end;
        }

        matches
    }
}
