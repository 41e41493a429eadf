//! Lexical analysis for tournament definition files.
//!
//! The lexer makes a single pass over the source and always produces a
//! complete token list plus every lexical error it found; it never stops
//! early. Braces and brackets are tracked on balance stacks so that missing
//! closers can be blamed on their opener.
//!
//! # Usage
//!
//! ```ignore
//! use tourney::lexer::tokenize;
//!
//! let lexed = tokenize("TORNEO { nombre: \"Copa\" }");
//! assert!(lexed.errors.is_empty());
//! println!("{} tokens", lexed.tokens.len());
//! ```

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{lookup_word, Attribute, Keyword, Symbol, Token, TokenKind};

use tracing::{debug, trace};

use crate::diagnostic::{LexError, LexErrorKind};
use crate::span::{Location, Span};

/// Output of [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Tokenized {
    /// Whether lexing reported no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tokenize a whole source text.
pub fn tokenize(source: &str) -> Tokenized {
    Lexer::new(source).run()
}

/// Whether `ch` may start or continue a word.
///
/// ASCII letters plus the accented Latin letters (Latin-1 Supplement and
/// Latin Extended-A), which covers `á é í ó ú ü ñ Ñ`.
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || (('\u{C0}'..='\u{17F}').contains(&ch) && ch.is_alphabetic())
}

pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    braces: Vec<Location>,
    brackets: Vec<Location>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
            braces: Vec::new(),
            brackets: Vec::new(),
        }
    }

    pub fn run(mut self) -> Tokenized {
        while let Some(ch) = self.scanner.current() {
            let start = self.scanner.location();
            if ch.is_whitespace() {
                self.scanner.advance();
            } else if is_letter(ch) {
                self.scan_word(start);
            } else if ch.is_ascii_digit() {
                self.scan_integer(start);
            } else if ch == '"' {
                self.scan_string(start);
            } else if let Some(symbol) = Symbol::from_char(ch) {
                self.scan_symbol(symbol, start);
            } else {
                self.scanner.advance();
                self.error(
                    LexErrorKind::InvalidToken,
                    ch.to_string(),
                    format!("character '{}' is not allowed", ch),
                    Span::new(start, self.scanner.location()),
                );
            }
        }

        // Unclosed openers, most recent first.
        while let Some(open) = self.braces.pop() {
            self.unclosed('{', '}', open);
        }
        while let Some(open) = self.brackets.pop() {
            self.unclosed('[', ']', open);
        }

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenized source"
        );

        Tokenized {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_word(&mut self, start: Location) {
        self.scanner
            .advance_while(|c| is_letter(c) || c.is_ascii_digit() || c == '_');
        let word = self.scanner.slice_from(start);
        let span = Span::new(start, self.scanner.location());

        if word.chars().any(|c| c.is_ascii_digit()) {
            self.error(
                LexErrorKind::InvalidToken,
                word.to_string(),
                format!("'{}' contains a digit; words may only use letters and '_'", word),
                span,
            );
            return;
        }

        self.tokens.push(Token::new(lookup_word(word), word, span));
    }

    fn scan_integer(&mut self, start: Location) {
        self.scanner.advance_while(|c| c.is_ascii_digit());
        let digits = self.scanner.slice_from(start);
        let span = Span::new(start, self.scanner.location());
        self.tokens.push(Token::new(TokenKind::Integer, digits, span));
    }

    fn scan_string(&mut self, start: Location) {
        self.scanner.advance(); // opening quote
        let content_start = self.scanner.location();

        loop {
            match self.scanner.current() {
                Some('"') => {
                    let content = self.scanner.slice_from(content_start);
                    self.scanner.advance();
                    let span = Span::new(start, self.scanner.location());
                    self.tokens.push(Token::new(TokenKind::String, content, span));
                    return;
                }
                // The newline stays in the input for the main loop.
                Some('\n') | None => {
                    let text = self.scanner.slice_from(start).trim_end_matches('\r');
                    let span = Span::new(start, self.scanner.location());
                    self.error(
                        LexErrorKind::UnterminatedString,
                        text.to_string(),
                        "string is never closed".to_string(),
                        span,
                    );
                    return;
                }
                Some(_) => {
                    self.scanner.advance();
                }
            }
        }
    }

    fn scan_symbol(&mut self, symbol: Symbol, start: Location) {
        self.scanner.advance();
        let span = Span::new(start, self.scanner.location());

        match symbol {
            Symbol::LBrace => self.braces.push(start),
            Symbol::LBracket => self.brackets.push(start),
            Symbol::RBrace => {
                if self.braces.pop().is_none() {
                    self.unmatched('}', '{', span);
                }
            }
            Symbol::RBracket => {
                if self.brackets.pop().is_none() {
                    self.unmatched(']', '[', span);
                }
            }
            Symbol::Colon | Symbol::Comma | Symbol::Dash => {}
        }

        self.tokens
            .push(Token::new(TokenKind::Symbol(symbol), symbol.as_char().to_string(), span));
    }

    fn unmatched(&mut self, closer: char, opener: char, span: Span) {
        self.error(
            LexErrorKind::UnbalancedDelimiter,
            closer.to_string(),
            format!("'{}' has no matching '{}'", closer, opener),
            span,
        );
    }

    fn unclosed(&mut self, opener: char, closer: char, at: Location) {
        let end = Location::new(at.offset + 1, at.line, at.column + 1);
        self.error(
            LexErrorKind::UnbalancedDelimiter,
            opener.to_string(),
            format!("'{}' is never closed; expected a matching '{}'", opener, closer),
            Span::new(at, end),
        );
    }

    fn error(&mut self, kind: LexErrorKind, lexeme: String, message: String, span: Span) {
        trace!(%kind, %lexeme, at = %span.start, "lexical error");
        self.errors.push(LexError {
            number: self.errors.len() + 1,
            lexeme,
            kind,
            message,
            span,
        });
    }
}
