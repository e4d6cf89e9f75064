//! Per-language word tables used by every extractor.
//!
//! Built-in lexicons are initialized once per process and shared read-only
//! through [`Lexicons::builtin`]. Tests and callers with custom vocabularies
//! can assemble their own registry with [`Lexicons::empty`] and
//! [`Lexicons::with`].

mod english;
mod french;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::error::NormalizeError;
use crate::models::{DurationUnit, Language};

static BUILTIN: LazyLock<Arc<Lexicons>> = LazyLock::new(|| {
    Arc::new(
        Lexicons::empty()
            .with(Lexicon::french())
            .with(Lexicon::english()),
    )
});

/// Role of a word inside a spelled-out number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberWord {
    /// 0 to 19, including irregular teens.
    Unit(u64),
    /// 20, 30, ... (and regional 70/80/90 forms).
    Tens(u64),
    /// "cent" / "hundred".
    Hundred,
    /// "mille" / "thousand", "million", ...
    Scale(u64),
    /// "et" / "and" between number words.
    Connector,
}

/// A hedge phrase and the precision it implies.
///
/// `precision` is `None` for hedges whose uncertainty is left to the
/// configured fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct HedgeEntry {
    words: Vec<String>,
    precision: Option<f64>,
}

impl HedgeEntry {
    pub fn new(phrase: &str, precision: Option<f64>) -> Self {
        Self {
            words: phrase.split_whitespace().map(str::to_lowercase).collect(),
            precision: precision.map(|p| p.clamp(0.0, 1.0)),
        }
    }

    /// Lowercased words of the phrase, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn precision(&self) -> Option<f64> {
        self.precision
    }
}

/// Word tables for one language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: Language,
    number_words: HashMap<String, NumberWord>,
    hedges: Vec<HedgeEntry>,
    duration_units: HashMap<String, DurationUnit>,
    conjunctions: Vec<String>,
    teen_tens: Vec<u64>,
    multiplied_tens: Vec<(u64, u64)>,
    ambiguous: Vec<String>,
}

impl Lexicon {
    pub fn builder(language: Language) -> LexiconBuilder {
        LexiconBuilder::new(language)
    }

    /// The built-in French tables.
    pub fn french() -> Self {
        french::lexicon()
    }

    /// The built-in English tables.
    pub fn english() -> Self {
        english::lexicon()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Looks up a single lowercased word (or a hyphenated form listed as-is).
    pub fn number_word(&self, word: &str) -> Option<NumberWord> {
        self.number_words.get(word).copied()
    }

    /// Hedge phrases, longest first.
    pub fn hedges(&self) -> &[HedgeEntry] {
        &self.hedges
    }

    pub fn duration_unit(&self, word: &str) -> Option<DurationUnit> {
        self.duration_units.get(word).copied()
    }

    /// Returns true for words joining two duration phrases ("et", "and").
    pub fn is_conjunction(&self, word: &str) -> bool {
        self.conjunctions.iter().any(|c| c == word)
    }

    /// Returns true when a teen (10..=19) may follow `tens` ("soixante-dix").
    pub fn accepts_teen_after(&self, tens: u64) -> bool {
        self.teen_tens.contains(&tens)
    }

    /// Returns true when `unit` followed by `tens` multiplies ("quatre-vingts").
    pub fn multiplies_tens(&self, unit: u64, tens: u64) -> bool {
        self.multiplied_tens.contains(&(unit, tens))
    }

    /// Returns true for number words that are also common articles or
    /// adjectives ("une", "neuf"). Alone they are not read as numbers.
    pub fn is_ambiguous(&self, word: &str) -> bool {
        self.ambiguous.iter().any(|w| w == word)
    }
}

/// Builder for [`Lexicon`], used by the built-in tables and by tests that
/// need a synthetic vocabulary.
///
/// # Examples
///
/// ```
/// use tagnorm::lexicon::{Lexicon, NumberWord};
/// use tagnorm::{DurationUnit, Language};
///
/// let lexicon = Lexicon::builder(Language::English)
///     .units(&[("one", 1), ("two", 2)])
///     .duration_units(&[("day", DurationUnit::Day)])
///     .hedges(&[("about", Some(0.1))])
///     .build();
///
/// assert_eq!(lexicon.number_word("two"), Some(NumberWord::Unit(2)));
/// assert_eq!(lexicon.duration_unit("day"), Some(DurationUnit::Day));
/// ```
#[derive(Debug)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            lexicon: Lexicon {
                language,
                number_words: HashMap::new(),
                hedges: Vec::new(),
                duration_units: HashMap::new(),
                conjunctions: Vec::new(),
                teen_tens: Vec::new(),
                multiplied_tens: Vec::new(),
                ambiguous: Vec::new(),
            },
        }
    }

    fn number_words(mut self, words: &[(&str, NumberWord)]) -> Self {
        for (word, role) in words {
            self.lexicon.number_words.insert(word.to_lowercase(), *role);
        }
        self
    }

    pub fn units(self, words: &[(&str, u64)]) -> Self {
        let words: Vec<_> = words.iter().map(|(w, v)| (*w, NumberWord::Unit(*v))).collect();
        self.number_words(&words)
    }

    pub fn tens(self, words: &[(&str, u64)]) -> Self {
        let words: Vec<_> = words.iter().map(|(w, v)| (*w, NumberWord::Tens(*v))).collect();
        self.number_words(&words)
    }

    pub fn hundreds(self, words: &[&str]) -> Self {
        let words: Vec<_> = words.iter().map(|w| (*w, NumberWord::Hundred)).collect();
        self.number_words(&words)
    }

    pub fn scales(self, words: &[(&str, u64)]) -> Self {
        let words: Vec<_> = words.iter().map(|(w, v)| (*w, NumberWord::Scale(*v))).collect();
        self.number_words(&words)
    }

    pub fn connectors(self, words: &[&str]) -> Self {
        let words: Vec<_> = words.iter().map(|w| (*w, NumberWord::Connector)).collect();
        self.number_words(&words)
    }

    pub fn hedges(mut self, hedges: &[(&str, Option<f64>)]) -> Self {
        self.lexicon
            .hedges
            .extend(hedges.iter().map(|(phrase, p)| HedgeEntry::new(phrase, *p)));
        self
    }

    pub fn duration_units(mut self, words: &[(&str, DurationUnit)]) -> Self {
        for (word, unit) in words {
            self.lexicon.duration_units.insert(word.to_lowercase(), *unit);
        }
        self
    }

    pub fn conjunctions(mut self, words: &[&str]) -> Self {
        self.lexicon
            .conjunctions
            .extend(words.iter().map(|w| w.to_lowercase()));
        self
    }

    pub fn teen_tens(mut self, tens: &[u64]) -> Self {
        self.lexicon.teen_tens.extend_from_slice(tens);
        self
    }

    pub fn multiplied_tens(mut self, pairs: &[(u64, u64)]) -> Self {
        self.lexicon.multiplied_tens.extend_from_slice(pairs);
        self
    }

    pub fn ambiguous(mut self, words: &[&str]) -> Self {
        self.lexicon
            .ambiguous
            .extend(words.iter().map(|w| w.to_lowercase()));
        self
    }

    #[must_use]
    pub fn build(mut self) -> Lexicon {
        self.lexicon
            .hedges
            .retain(|hedge| !hedge.words().is_empty());
        // Longest phrases first so "à peu près" wins over any shorter prefix.
        self.lexicon
            .hedges
            .sort_by(|a, b| b.words().len().cmp(&a.words().len()));
        self.lexicon
    }
}

/// Registry of lexicons by language.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    by_language: HashMap<Language, Lexicon>,
}

impl Lexicons {
    /// The process-wide built-in registry (French and English).
    pub fn builtin() -> Arc<Lexicons> {
        Arc::clone(&BUILTIN)
    }

    /// A registry with no languages.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the lexicon for its language.
    #[must_use]
    pub fn with(mut self, lexicon: Lexicon) -> Self {
        self.by_language.insert(lexicon.language(), lexicon);
        self
    }

    /// Returns the lexicon for `language`.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedLanguage` if the registry has no
    /// lexicon for it.
    pub fn get(&self, language: Language) -> Result<&Lexicon, NormalizeError> {
        self.by_language
            .get(&language)
            .ok_or_else(|| NormalizeError::UnsupportedLanguage(language.code().to_string()))
    }

    pub fn supports(&self, language: Language) -> bool {
        self.by_language.contains_key(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_supports_both_languages() {
        let lexicons = Lexicons::builtin();
        for language in Language::ALL {
            assert!(lexicons.supports(language));
            assert_eq!(lexicons.get(language).unwrap().language(), language);
        }
    }

    #[test]
    fn builtin_registry_is_shared() {
        assert!(Arc::ptr_eq(&Lexicons::builtin(), &Lexicons::builtin()));
    }

    #[test]
    fn empty_registry_reports_unsupported_language() {
        let err = Lexicons::empty().get(Language::French).unwrap_err();
        assert!(matches!(err, NormalizeError::UnsupportedLanguage(code) if code == "fr"));
    }

    #[test]
    fn hedges_are_sorted_longest_first() {
        let lexicon = Lexicon::builder(Language::French)
            .hedges(&[("vers", None), ("à peu près", Some(0.15)), ("", Some(0.5))])
            .build();

        let phrases: Vec<usize> = lexicon.hedges().iter().map(|h| h.words().len()).collect();
        assert_eq!(phrases, vec![3, 1]);
    }

    #[test]
    fn hedge_precision_is_clamped() {
        let hedge = HedgeEntry::new("about", Some(1.5));
        assert_eq!(hedge.precision(), Some(1.0));
    }

    #[test]
    fn french_tables_cover_irregular_forms() {
        let fr = Lexicon::french();
        assert_eq!(fr.number_word("dix-sept"), Some(NumberWord::Unit(17)));
        assert_eq!(fr.number_word("vingts"), Some(NumberWord::Tens(20)));
        assert_eq!(fr.number_word("cent"), Some(NumberWord::Hundred));
        assert_eq!(fr.number_word("et"), Some(NumberWord::Connector));
        assert!(fr.accepts_teen_after(60));
        assert!(fr.multiplies_tens(4, 20));
        assert_eq!(fr.duration_unit("mois"), Some(DurationUnit::Month));
        assert!(fr.is_conjunction("et"));
        assert!(fr.is_ambiguous("une"));
        assert!(fr.is_ambiguous("neuf"));
        assert!(!fr.is_ambiguous("deux"));
    }

    #[test]
    fn english_tables_have_no_vigesimal_rules() {
        let en = Lexicon::english();
        assert_eq!(en.number_word("fifteen"), Some(NumberWord::Unit(15)));
        assert_eq!(en.number_word("thousand"), Some(NumberWord::Scale(1_000)));
        assert!(!en.accepts_teen_after(60));
        assert!(!en.multiplies_tens(4, 20));
        assert_eq!(en.duration_unit("weeks"), Some(DurationUnit::Week));
    }
}
