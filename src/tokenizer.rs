//! Tokenizer shared by the extractors.
//!
//! Splits text into words (letters and digits, with inner hyphens kept so
//! "vingt-cinq" stays whole), numbers (digit runs with an optional `.` or `,`
//! decimal part) and single-character symbols. Whitespace separates tokens
//! and is never emitted.

use std::ops::Range;

use crate::models::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Symbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    lower: String,
    span: Span,
    bytes: Range<usize>,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased text, used for every lexicon lookup.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Character span in the source text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Parsed value of a number token. Accepts `,` as decimal separator.
    pub fn number_value(&self) -> Option<f64> {
        if self.kind != TokenKind::Number {
            return None;
        }
        self.text.replace(',', ".").parse().ok()
    }
}

/// Tokens of one input string, with access back to the source.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Tokens<'a> {
    /// Tokenizes `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::tokenizer::{TokenKind, Tokens};
    ///
    /// let tokens = Tokens::new("~10 jours, vingt-cinq");
    /// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    /// assert_eq!(texts, vec!["~", "10", "jours", ",", "vingt-cinq"]);
    /// assert_eq!(tokens.get(1).unwrap().kind(), TokenKind::Number);
    /// ```
    pub fn new(source: &'a str) -> Self {
        let chars: Vec<(usize, char)> = source.char_indices().collect();
        let byte_at = |i: usize| chars.get(i).map_or(source.len(), |(b, _)| *b);

        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i].1;
            let start = i;
            let kind = if c.is_whitespace() {
                i += 1;
                continue;
            } else if c.is_ascii_digit() {
                i = scan_number(&chars, i);
                TokenKind::Number
            } else if c.is_alphabetic() {
                i = scan_word(&chars, i);
                TokenKind::Word
            } else {
                i += 1;
                TokenKind::Symbol
            };

            let bytes = byte_at(start)..byte_at(i);
            let text = source[bytes.clone()].to_string();
            tokens.push(Token {
                kind,
                lower: text.to_lowercase(),
                text,
                span: Span::new(start, i),
                bytes,
            });
        }

        Self { source, tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Returns true when only whitespace (or nothing) separates token `left`
    /// from the following token `right`.
    pub fn blank_between(&self, left: usize, right: usize) -> bool {
        match (self.tokens.get(left), self.tokens.get(right)) {
            (Some(l), Some(r)) if l.bytes.end <= r.bytes.start => self.source
                [l.bytes.end..r.bytes.start]
                .chars()
                .all(char::is_whitespace),
            _ => false,
        }
    }

    /// Character span from the start of `first` to the end of `last` (inclusive).
    pub fn span(&self, first: usize, last: usize) -> Option<Span> {
        let first = self.tokens.get(first)?;
        let last = self.tokens.get(last)?;
        Some(Span::new(first.span.start(), last.span.end()))
    }

    /// Source text from the start of `first` to the end of `last` (inclusive).
    pub fn text(&self, first: usize, last: usize) -> Option<&'a str> {
        let start = self.tokens.get(first)?.bytes.start;
        let end = self.tokens.get(last)?.bytes.end;
        self.source.get(start..end)
    }
}

fn scan_number(chars: &[(usize, char)], mut i: usize) -> usize {
    while chars.get(i).is_some_and(|(_, c)| c.is_ascii_digit()) {
        i += 1;
    }
    let separator = chars.get(i).is_some_and(|(_, c)| matches!(c, '.' | ','));
    let fraction = chars.get(i + 1).is_some_and(|(_, c)| c.is_ascii_digit());
    if separator && fraction {
        i += 1;
        while chars.get(i).is_some_and(|(_, c)| c.is_ascii_digit()) {
            i += 1;
        }
    }
    i
}

fn scan_word(chars: &[(usize, char)], mut i: usize) -> usize {
    while let Some(&(_, c)) = chars.get(i) {
        if c.is_alphanumeric() {
            i += 1;
        } else if c == '-' && chars.get(i + 1).is_some_and(|(_, n)| n.is_alphabetic()) {
            i += 1;
        } else {
            break;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &Tokens<'_>) -> Vec<String> {
        tokens.iter().map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn keeps_hyphenated_words_whole() {
        let tokens = Tokens::new("quatre-vingt-dix-neuf jours");
        assert_eq!(texts(&tokens), vec!["quatre-vingt-dix-neuf", "jours"]);
        assert_eq!(tokens.get(0).unwrap().kind(), TokenKind::Word);
    }

    #[test]
    fn trailing_hyphen_is_a_symbol() {
        let tokens = Tokens::new("vingt- jours");
        assert_eq!(texts(&tokens), vec!["vingt", "-", "jours"]);
    }

    #[test]
    fn splits_digits_from_following_letters() {
        let tokens = Tokens::new("10jours");
        assert_eq!(texts(&tokens), vec!["10", "jours"]);
        assert!(tokens.blank_between(0, 1));
    }

    #[test]
    fn parses_decimal_numbers_with_either_separator() {
        let tokens = Tokens::new("1.5 h et 2,25 h");
        assert_eq!(tokens.get(0).unwrap().number_value(), Some(1.5));
        assert_eq!(tokens.get(3).unwrap().number_value(), Some(2.25));
    }

    #[test]
    fn trailing_period_is_not_a_decimal_part() {
        let tokens = Tokens::new("10 jours.");
        assert_eq!(texts(&tokens), vec!["10", "jours", "."]);
    }

    #[test]
    fn apostrophe_separates_words() {
        let tokens = Tokens::new("d'environ");
        assert_eq!(texts(&tokens), vec!["d", "'", "environ"]);
        assert!(!tokens.blank_between(0, 2));
    }

    #[test]
    fn spans_count_characters_not_bytes() {
        let tokens = Tokens::new("tâche de deux jours");
        let deux = tokens.get(2).unwrap();
        assert_eq!(deux.text(), "deux");
        assert_eq!(deux.span(), Span::new(9, 13));
        assert_eq!(tokens.text(2, 3), Some("deux jours"));
        assert_eq!(tokens.span(2, 3), Some(Span::new(9, 19)));
    }

    #[test]
    fn blank_between_rejects_punctuation_gaps() {
        let tokens = Tokens::new("dix , jours");
        assert!(tokens.blank_between(0, 1));
        assert!(!tokens.blank_between(0, 2));
        assert!(!tokens.blank_between(2, 0));
    }

    #[test]
    fn lowercases_for_lookup() {
        let tokens = Tokens::new("Environ VINGT");
        assert_eq!(tokens.get(0).unwrap().lower(), "environ");
        assert_eq!(tokens.get(1).unwrap().lower(), "vingt");
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(Tokens::new("   ").is_empty());
    }
}
