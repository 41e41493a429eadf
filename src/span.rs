//! Source location tracking for tokens and diagnostics.

use std::fmt;

use serde::Serialize;

/// A location in source text (byte offset, line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    /// Byte offset from start of input
    pub offset: usize,
    /// Line number (1-indexed, 0 when no position is known)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The location of the first character of a source.
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span in source text (start and end locations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Start location (inclusive)
    pub start: Location,
    /// End location (exclusive)
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// An empty span sitting at `at`.
    pub fn point(at: Location) -> Self {
        Self { start: at, end: at }
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.start.line, self.start.column, self.end.column)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start.offset, span.len()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(Location::new(4, 1, 5), Location::new(9, 1, 10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::point(Location::start()).is_empty());
    }

    #[test]
    fn test_span_display() {
        let same_line = Span::new(Location::new(0, 2, 3), Location::new(4, 2, 7));
        assert_eq!(same_line.to_string(), "2:3-7");

        let multi_line = Span::new(Location::new(0, 2, 3), Location::new(20, 4, 1));
        assert_eq!(multi_line.to_string(), "2:3-4:1");
    }

    #[test]
    fn test_source_span_conversion() {
        let span = Span::new(Location::new(10, 2, 1), Location::new(16, 2, 7));
        let source: miette::SourceSpan = span.into();
        assert_eq!(source.offset(), 10);
        assert_eq!(source.len(), 6);
    }
}
