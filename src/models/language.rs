use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NormalizeError;

/// Language of a tag, selecting the lexicon used by every extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Every language with a built-in lexicon.
    pub const ALL: [Language; 2] = [Language::French, Language::English];

    /// Returns the ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = NormalizeError;

    /// Parses a language code or name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::Language;
    ///
    /// assert_eq!("FR".parse::<Language>().unwrap(), Language::French);
    /// assert_eq!("english".parse::<Language>().unwrap(), Language::English);
    /// assert!("de".parse::<Language>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "fra" | "fre" | "french" | "français" | "francais" => Ok(Self::French),
            "en" | "eng" | "english" | "anglais" => Ok(Self::English),
            _ => Err(NormalizeError::UnsupportedLanguage(s.to_string())),
        }
    }
}
