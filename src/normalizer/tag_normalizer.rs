//! Orchestrates the extractors over one tag and rewrites it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::NormalizeError;
use crate::extractors::{ApproximateExpressionExtractor, TextualNumberExtractor, TimeUnitExtractor};
use crate::lexicon::Lexicons;
use crate::models::{Language, NormalizedTag, TagInput};

use super::{NormalizerConfig, render, resolve};

/// Builder for constructing `TagNormalizer` instances.
///
/// # Examples
///
/// ```
/// use tagnorm::normalizer::{NormalizerConfig, TagNormalizerBuilder};
/// use tagnorm::lexicon::Lexicons;
///
/// let normalizer = TagNormalizerBuilder::new()
///     .lexicons(Lexicons::builtin())
///     .config(NormalizerConfig::default())
///     .build();
/// assert_eq!(normalizer.config().duration_suffix, "min");
/// ```
#[derive(Debug, Default)]
pub struct TagNormalizerBuilder {
    lexicons: Option<Arc<Lexicons>>,
    config: Option<NormalizerConfig>,
}

impl TagNormalizerBuilder {
    /// Creates a new `TagNormalizerBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lexicon registry. Defaults to [`Lexicons::builtin`].
    pub fn lexicons(mut self, lexicons: Arc<Lexicons>) -> Self {
        self.lexicons = Some(lexicons);
        self
    }

    /// Sets the configuration. Defaults to [`NormalizerConfig::from_env`].
    pub fn config(mut self, config: NormalizerConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn build(self) -> TagNormalizer {
        TagNormalizer {
            lexicons: self.lexicons.unwrap_or_else(Lexicons::builtin),
            config: self.config.unwrap_or_else(NormalizerConfig::from_env),
        }
    }
}

/// Normalizes tags by detecting approximate quantities, spelled-out numbers
/// and durations, then rewriting them in canonical form.
///
/// A `TagNormalizer` holds only read-only data and can be shared across
/// threads.
///
/// # Examples
///
/// ```
/// use tagnorm::normalizer::{NormalizerConfig, TagNormalizerBuilder};
/// use tagnorm::Language;
///
/// let normalizer = TagNormalizerBuilder::new()
///     .config(NormalizerConfig::default())
///     .build();
///
/// let tag = normalizer
///     .normalize_tag("Le projet prendra 10 jours et 5 heures.", Language::French)
///     .unwrap();
/// assert_eq!(tag.normalized_text(), "Le projet prendra 14700min.");
/// ```
#[derive(Debug, Clone)]
pub struct TagNormalizer {
    lexicons: Arc<Lexicons>,
    config: NormalizerConfig,
}

impl Default for TagNormalizer {
    fn default() -> Self {
        TagNormalizerBuilder::new().build()
    }
}

impl TagNormalizer {
    pub fn builder() -> TagNormalizerBuilder {
        TagNormalizerBuilder::new()
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Normalizes one tag.
    ///
    /// Runs the three extractors, keeps a non-overlapping subset of their
    /// matches (approximate expression > time unit > textual number) and
    /// rewrites the text.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedLanguage` if no lexicon is
    /// registered for `language`.
    pub fn normalize_tag(
        &self,
        text: &str,
        language: Language,
    ) -> Result<NormalizedTag, NormalizeError> {
        let approximate = ApproximateExpressionExtractor::extract_with_fallback(
            text,
            language,
            &self.lexicons,
            self.config.fallback_precision,
        )?;
        let time_units = TimeUnitExtractor::extract(text, language, &self.lexicons)?;
        let textual_numbers = TextualNumberExtractor::extract(text, language, &self.lexicons)?;

        let candidates = approximate.len() + time_units.len() + textual_numbers.len();
        let retained = resolve::resolve_overlaps(
            approximate
                .into_iter()
                .chain(time_units)
                .chain(textual_numbers)
                .collect(),
        );
        let normalized = render::rewrite(text, &retained, &self.config);

        debug!(
            %language,
            candidates,
            retained = retained.len(),
            changed = (normalized != text),
            "normalized tag"
        );

        Ok(NormalizedTag::new(text, normalized, retained))
    }

    /// Normalizes one tag given a language code such as `"fr"` or `"en"`.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedLanguage` if the code is not
    /// recognized or has no lexicon.
    pub fn normalize_tag_code(
        &self,
        text: &str,
        code: &str,
    ) -> Result<NormalizedTag, NormalizeError> {
        let language: Language = code.parse()?;
        self.normalize_tag(text, language)
    }

    /// Normalizes a batch of tags, preserving order.
    ///
    /// A tag whose language is unsupported is returned unchanged with no
    /// matches, so one bad language code never aborts the batch.
    pub fn normalize_tags(&self, inputs: &[TagInput]) -> Vec<NormalizedTag> {
        inputs
            .iter()
            .map(|input| {
                self.normalize_tag_code(&input.text, &input.language)
                    .unwrap_or_else(|err| {
                        warn!(language = %input.language, %err, "leaving tag unchanged");
                        NormalizedTag::unchanged(input.text.clone())
                    })
            })
            .collect()
    }
}
