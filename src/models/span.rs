use serde::{Deserialize, Serialize};

/// Half-open range `[start, end)` over the characters of the original text.
///
/// Offsets count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span; `end` is clamped so that it is never before `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns true when the two spans share at least one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::Span;
    ///
    /// assert!(Span::new(0, 5).overlaps(Span::new(4, 8)));
    /// assert!(!Span::new(0, 5).overlaps(Span::new(5, 8)));
    /// ```
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true when `other` lies entirely inside this span.
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_spans_do_not_overlap() {
        assert!(!Span::new(0, 3).overlaps(Span::new(3, 6)));
        assert!(!Span::new(3, 6).overlaps(Span::new(0, 3)));
    }

    #[test]
    fn nested_spans_overlap_and_contain() {
        let outer = Span::new(0, 10);
        let inner = Span::new(2, 4);
        assert!(outer.overlaps(inner));
        assert!(outer.contains(inner));
        assert!(!inner.contains(outer));
    }

    #[test]
    fn new_never_produces_negative_length() {
        let span = Span::new(5, 2);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }
}
