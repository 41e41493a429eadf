//! Token kinds and the reserved-word table.
//!
//! Every reserved word has a Spanish and an English spelling; both map to
//! the same [`TokenKind`], so the parser never looks at lexemes to decide
//! what a word means.

use std::fmt;

use serde::Serialize;

use crate::span::Span;
use crate::types::{Phase, Position};

/// Structural keywords: sections, entries and phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Tournament,
    Teams,
    Elimination,
    Team,
    Player,
    Match,
    Scorer,
    Quarterfinals,
    Semifinal,
    Final,
}

impl Keyword {
    /// The phase this keyword names, if it is a phase keyword.
    pub fn phase(self) -> Option<Phase> {
        match self {
            Keyword::Quarterfinals => Some(Phase::Quarterfinals),
            Keyword::Semifinal => Some(Phase::Semifinal),
            Keyword::Final => Some(Phase::Final),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Keyword::Tournament => "TOURNEY",
            Keyword::Teams => "TEAMS",
            Keyword::Elimination => "ELIMINATION",
            Keyword::Team => "team",
            Keyword::Player => "player",
            Keyword::Match => "match",
            Keyword::Scorer => "scorer",
            Keyword::Quarterfinals => "quarterfinals",
            Keyword::Semifinal => "semifinal",
            Keyword::Final => "final",
        }
    }
}

/// Attribute names used as `attribute: value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Attribute {
    Name,
    TeamCount,
    Venue,
    Position,
    Number,
    Age,
    Result,
    Scorers,
    Minute,
}

impl Attribute {
    fn name(self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::TeamCount => "teams",
            Attribute::Venue => "venue",
            Attribute::Position => "position",
            Attribute::Number => "number",
            Attribute::Age => "age",
            Attribute::Result => "result",
            Attribute::Scorers => "scorers",
            Attribute::Minute => "minute",
        }
    }
}

/// Single-character punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Dash,
}

impl Symbol {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '{' => Some(Symbol::LBrace),
            '}' => Some(Symbol::RBrace),
            '[' => Some(Symbol::LBracket),
            ']' => Some(Symbol::RBracket),
            ':' => Some(Symbol::Colon),
            ',' => Some(Symbol::Comma),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::LBrace => '{',
            Symbol::RBrace => '}',
            Symbol::LBracket => '[',
            Symbol::RBracket => ']',
            Symbol::Colon => ':',
            Symbol::Comma => ',',
            Symbol::Dash => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Attribute(Attribute),
    Position(Position),
    Identifier,
    String,
    Integer,
    Symbol(Symbol),
    /// The `vs` connector between two teams.
    Vs,
}

impl TokenKind {
    /// Broad token class as shown in token listings.
    pub fn class(self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "reserved-word",
            TokenKind::Attribute(_) => "attribute-word",
            TokenKind::Position(_) => "position-word",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string-literal",
            TokenKind::Integer => "integer-literal",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Vs => "connector",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(k) => write!(f, "'{}'", k.name()),
            TokenKind::Attribute(a) => write!(f, "'{}'", a.name()),
            TokenKind::Position(p) => write!(f, "'{}'", p.name()),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::String => f.write_str("string"),
            TokenKind::Integer => f.write_str("number"),
            TokenKind::Symbol(s) => write!(f, "'{}'", s.as_char()),
            TokenKind::Vs => f.write_str("'vs'"),
        }
    }
}

/// Classify a word that contains no digits.
pub fn lookup_word(word: &str) -> TokenKind {
    match word {
        "TORNEO" | "TOURNEY" => TokenKind::Keyword(Keyword::Tournament),
        "EQUIPOS" | "TEAMS" => TokenKind::Keyword(Keyword::Teams),
        "ELIMINACION" | "ELIMINATION" => TokenKind::Keyword(Keyword::Elimination),
        "equipo" | "team" => TokenKind::Keyword(Keyword::Team),
        "jugador" | "player" => TokenKind::Keyword(Keyword::Player),
        "partido" | "match" => TokenKind::Keyword(Keyword::Match),
        "goleador" | "scorer" => TokenKind::Keyword(Keyword::Scorer),
        "cuartos" | "quarterfinals" => TokenKind::Keyword(Keyword::Quarterfinals),
        "semifinal" => TokenKind::Keyword(Keyword::Semifinal),
        "final" => TokenKind::Keyword(Keyword::Final),
        "nombre" | "name" => TokenKind::Attribute(Attribute::Name),
        "equipos" | "teams" => TokenKind::Attribute(Attribute::TeamCount),
        "sede" | "venue" => TokenKind::Attribute(Attribute::Venue),
        "posicion" | "position" => TokenKind::Attribute(Attribute::Position),
        "numero" | "number" => TokenKind::Attribute(Attribute::Number),
        "edad" | "age" => TokenKind::Attribute(Attribute::Age),
        "resultado" | "result" => TokenKind::Attribute(Attribute::Result),
        "goleadores" | "scorers" => TokenKind::Attribute(Attribute::Scorers),
        "minuto" | "minute" => TokenKind::Attribute(Attribute::Minute),
        "vs" => TokenKind::Vs,
        _ => match Position::from_word(word) {
            Some(position) => TokenKind::Position(position),
            None => TokenKind::Identifier,
        },
    }
}

/// A classified lexeme. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text; for strings, the text between the quotes.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_spellings() {
        assert_eq!(lookup_word("TORNEO"), lookup_word("TOURNEY"));
        assert_eq!(lookup_word("goleadores"), TokenKind::Attribute(Attribute::Scorers));
        assert_eq!(lookup_word("cuartos"), TokenKind::Keyword(Keyword::Quarterfinals));
        assert_eq!(lookup_word("DELANTERO"), TokenKind::Position(Position::Forward));
        assert_eq!(lookup_word("vs"), TokenKind::Vs);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup_word("EQUIPOS"), TokenKind::Keyword(Keyword::Teams));
        assert_eq!(lookup_word("equipos"), TokenKind::Attribute(Attribute::TeamCount));
        assert_eq!(lookup_word("Torneo"), TokenKind::Identifier);
    }

    #[test]
    fn test_phase_keywords() {
        assert_eq!(Keyword::Semifinal.phase(), Some(Phase::Semifinal));
        assert_eq!(Keyword::Match.phase(), None);
    }

    #[test]
    fn test_kind_class_and_display() {
        assert_eq!(TokenKind::Vs.class(), "connector");
        assert_eq!(TokenKind::Symbol(Symbol::Dash).class(), "symbol");
        assert_eq!(TokenKind::Keyword(Keyword::Tournament).to_string(), "'TOURNEY'");
        assert_eq!(TokenKind::String.to_string(), "string");
    }
}
