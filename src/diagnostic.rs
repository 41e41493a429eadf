//! Lexical and syntax error records.
//!
//! Both analysis stages report problems as data rather than failing: every
//! malformed construct becomes one [`LexError`] or [`SyntaxError`], numbered
//! from 1 in the order it was found. [`SourceDiagnostic`] turns either kind
//! into a `miette` report with a source snippet for terminal output.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use serde::Serialize;
use thiserror::Error;

use crate::span::Span;

/// Category of a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LexErrorKind {
    /// A character outside the alphabet, or a word containing a digit.
    InvalidToken,
    /// A closer with no opener, or an opener that is never closed.
    UnbalancedDelimiter,
    /// A string literal cut off by a newline or the end of input.
    UnterminatedString,
}

impl LexErrorKind {
    /// Machine-readable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            LexErrorKind::InvalidToken => "tourney::lex::invalid-token",
            LexErrorKind::UnbalancedDelimiter => "tourney::lex::unbalanced-delimiter",
            LexErrorKind::UnterminatedString => "tourney::lex::unterminated-string",
        }
    }

    fn help(self) -> &'static str {
        match self {
            LexErrorKind::InvalidToken => {
                "words may only contain letters and underscores; numbers stand on their own"
            }
            LexErrorKind::UnbalancedDelimiter => "every '{' needs a '}' and every '[' needs a ']'",
            LexErrorKind::UnterminatedString => "close the string with '\"' on the same line",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexErrorKind::InvalidToken => "INVALID_TOKEN",
            LexErrorKind::UnbalancedDelimiter => "UNBALANCED_DELIMITER",
            LexErrorKind::UnterminatedString => "UNTERMINATED_STRING",
        })
    }
}

/// A problem found while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexError {
    /// Sequence number, starting at 1.
    pub number: usize,
    /// The offending source text.
    pub lexeme: String,
    pub kind: LexErrorKind,
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    /// Attach source text for rendering.
    pub fn to_diagnostic(&self, name: &str, source: &str) -> SourceDiagnostic {
        SourceDiagnostic {
            message: self.message.clone(),
            code: self.kind.code(),
            help: Some(self.kind.help()),
            label: format!("{}", self.kind),
            span: self.span.into(),
            src: NamedSource::new(name, source.to_string()),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.span.start, self.kind, self.message)
    }
}

/// Category of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyntaxErrorKind {
    /// A token that does not fit the grammar at this point.
    UnexpectedToken,
    /// An attribute name that the enclosing block does not accept.
    UnknownAttribute,
    /// A section or phase keyword that is not recognized.
    UnknownSection,
    /// Declared team count differs from the number of teams defined.
    CardinalityMismatch,
    /// A team name defined more than once.
    DuplicateTeam,
    /// A match names a team that is not defined (strict mode only).
    UnknownTeamReference,
}

impl SyntaxErrorKind {
    /// Machine-readable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            SyntaxErrorKind::UnexpectedToken => "tourney::syntax::unexpected-token",
            SyntaxErrorKind::UnknownAttribute => "tourney::syntax::unknown-attribute",
            SyntaxErrorKind::UnknownSection => "tourney::syntax::unknown-section",
            SyntaxErrorKind::CardinalityMismatch => "tourney::syntax::cardinality-mismatch",
            SyntaxErrorKind::DuplicateTeam => "tourney::syntax::duplicate-team",
            SyntaxErrorKind::UnknownTeamReference => "tourney::syntax::unknown-team",
        }
    }

    /// Whether the document is still meaningful despite this error.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            SyntaxErrorKind::UnexpectedToken
                | SyntaxErrorKind::UnknownAttribute
                | SyntaxErrorKind::UnknownSection
        )
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyntaxErrorKind::UnexpectedToken => "UNEXPECTED_TOKEN",
            SyntaxErrorKind::UnknownAttribute => "UNKNOWN_ATTRIBUTE",
            SyntaxErrorKind::UnknownSection => "UNKNOWN_SECTION",
            SyntaxErrorKind::CardinalityMismatch => "CARDINALITY_MISMATCH",
            SyntaxErrorKind::DuplicateTeam => "DUPLICATE_TEAM",
            SyntaxErrorKind::UnknownTeamReference => "UNKNOWN_TEAM_REFERENCE",
        })
    }
}

/// A problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    /// Sequence number, starting at 1.
    pub number: usize,
    pub kind: SyntaxErrorKind,
    pub message: String,
    /// Span of the offending token.
    pub span: Span,
}

impl SyntaxError {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    /// Attach source text for rendering.
    pub fn to_diagnostic(&self, name: &str, source: &str) -> SourceDiagnostic {
        SourceDiagnostic {
            message: self.message.clone(),
            code: self.kind.code(),
            help: None,
            label: format!("{}", self.kind),
            span: self.span.into(),
            src: NamedSource::new(name, source.to_string()),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.span.start, self.kind, self.message)
    }
}

/// A lexical or syntax error paired with its source, ready for `miette`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceDiagnostic {
    message: String,
    code: &'static str,
    help: Option<&'static str>,
    label: String,
    span: SourceSpan,
    src: NamedSource<String>,
}

impl Diagnostic for SourceDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.label.clone()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}
