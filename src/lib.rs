//! tourney - Tournament definition front end
//!
//! A library for reading single-elimination tournament definitions: a
//! lexer and a recoverable recursive-descent parser that turn source text
//! into a [`Tournament`] plus lists of lexical and syntax errors, and
//! read-only reports over the result.

pub mod analysis;
pub mod cli;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod report;
pub mod span;
pub mod types;

pub use analysis::{analyze, Analysis};
pub use diagnostic::{LexError, LexErrorKind, SourceDiagnostic, SyntaxError, SyntaxErrorKind};
pub use discovery::{collect_sources, Config, OutputFormat};
pub use error::{Result, TourneyError};
pub use lexer::{tokenize, Token, TokenKind, Tokenized};
pub use parser::{parse, parse_with, ParseOptions, Parsed};
pub use span::{Location, Span};
pub use types::{Match, Phase, Player, Position, Scorer, Team, Tournament, Winner};
