//! Recursive-descent parser for tournament definitions.
//!
//! The parser turns a token stream into a [`Tournament`] and a list of
//! [`SyntaxError`]s. It never fails: malformed constructs are recorded and
//! skipped, and a best-effort document is always returned.
//!
//! # Document Structure
//!
//! A definition has three mandatory sections, in order:
//! - `TOURNEY { ... }` with the tournament name, team count and venue
//! - `TEAMS { ... }` with one `team` entry per squad
//! - `ELIMINATION { ... }` with the matches of each knockout phase
//!
//! # Usage
//!
//! ```ignore
//! use tourney::lexer::tokenize;
//! use tourney::parser::parse;
//!
//! let lexed = tokenize(&source);
//! let parsed = parse(&lexed.tokens);
//! for error in &parsed.errors {
//!     eprintln!("{}", error);
//! }
//! ```

mod elimination;
mod teams;
mod tournament;

use tracing::{debug, trace};

use crate::diagnostic::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{Symbol, Token, TokenKind};
use crate::span::Span;
use crate::types::Tournament;

/// Knobs that change what the parser reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Report matches that name a team missing from `TEAMS`.
    pub strict_team_refs: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            strict_team_refs: true,
        }
    }
}

/// Output of [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub document: Tournament,
    pub errors: Vec<SyntaxError>,
}

impl Parsed {
    /// Whether parsing reported no errors.
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into document, errors and the success flag.
    pub fn into_parts(self) -> (Tournament, Vec<SyntaxError>, bool) {
        let ok = self.succeeded();
        (self.document, self.errors, ok)
    }
}

/// Parse a token stream with default options.
pub fn parse(tokens: &[Token]) -> Parsed {
    parse_with(tokens, ParseOptions::default())
}

/// Parse a token stream.
pub fn parse_with(tokens: &[Token], options: ParseOptions) -> Parsed {
    let mut parser = Parser::new(tokens, options);
    parser.parse_document();
    parser.finish()
}

struct Parser<'t> {
    tokens: &'t [Token],
    idx: usize,
    options: ParseOptions,
    errors: Vec<SyntaxError>,
    document: Tournament,
    /// Span of the declared team count, for cardinality errors.
    team_count_span: Option<Span>,
    /// End of input has been reported once already.
    eof_reported: bool,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token], options: ParseOptions) -> Self {
        Self {
            tokens,
            idx: 0,
            options,
            errors: Vec::new(),
            document: Tournament::new(),
            team_count_span: None,
            eof_reported: false,
        }
    }

    fn finish(self) -> Parsed {
        debug!(
            teams = self.document.teams.len(),
            matches = self.document.match_count(),
            errors = self.errors.len(),
            "parsed document"
        );
        Parsed {
            document: self.document,
            errors: self.errors,
        }
    }

    fn parse_document(&mut self) {
        self.tournament_block();
        self.teams_block();
        self.elimination_block();

        if let Some(token) = self.peek() {
            self.error_at(
                SyntaxErrorKind::UnknownSection,
                format!(
                    "unexpected {} after the ELIMINATION block",
                    describe(token)
                ),
                token.span,
            );
            self.idx = self.tokens.len();
        }

        self.check_team_count();
    }

    fn check_team_count(&mut self) {
        let declared = self.document.declared_team_count;
        let defined = self.document.teams.len();
        if declared as usize != defined {
            let span = self.team_count_span.unwrap_or_default();
            self.error_at(
                SyntaxErrorKind::CardinalityMismatch,
                format!(
                    "declared {} team{} but {} {} defined",
                    declared,
                    if declared == 1 { "" } else { "s" },
                    defined,
                    if defined == 1 { "was" } else { "were" }
                ),
                span,
            );
        }
    }

    // Token primitives

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.idx)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn at_symbol(&self, symbol: Symbol) -> bool {
        self.at(TokenKind::Symbol(symbol))
    }

    fn at_eof(&self) -> bool {
        self.idx >= self.tokens.len()
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.idx)?;
        self.idx += 1;
        Some(token)
    }

    /// Consume the current token if it is `kind`.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.idx += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or report the token that is there instead
    /// and consume it.
    fn expect(&mut self, kind: TokenKind, what: &str) -> Option<&'t Token> {
        if self.at(kind) {
            return self.bump();
        }
        self.unexpected(what);
        None
    }

    fn expect_symbol(&mut self, symbol: Symbol) -> bool {
        let what = format!("'{}'", symbol.as_char());
        self.expect(TokenKind::Symbol(symbol), &what).is_some()
    }

    fn expect_string(&mut self, what: &str) -> Option<(String, Span)> {
        self.expect(TokenKind::String, what)
            .map(|t| (t.lexeme.clone(), t.span))
    }

    /// Consume an integer literal that fits in a `u32`.
    fn expect_number(&mut self, what: &str) -> Option<u32> {
        let token = self.expect(TokenKind::Integer, what)?;
        match token.lexeme.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.error_at(
                    SyntaxErrorKind::UnexpectedToken,
                    format!("number out of range: {}", token.lexeme),
                    token.span,
                );
                None
            }
        }
    }

    /// Report the current token as unexpected and step over it.
    fn unexpected(&mut self, what: &str) {
        match self.bump() {
            Some(token) => {
                let message = format!("expected {}, found {}", what, describe(token));
                self.error_at(SyntaxErrorKind::UnexpectedToken, message, token.span);
            }
            None => {
                if !self.eof_reported {
                    self.eof_reported = true;
                    let message = format!("expected {}, found end of input", what);
                    let span = self.end_span();
                    self.error_at(SyntaxErrorKind::UnexpectedToken, message, span);
                }
            }
        }
    }

    /// Record an error at the current token, skip it and everything up to a
    /// token accepted by `sync`, then step over a separating comma.
    fn recover<F>(&mut self, kind: SyntaxErrorKind, message: String, sync: F)
    where
        F: Fn(TokenKind) -> bool,
    {
        let span = self.here();
        self.error_at(kind, message, span);
        self.bump();
        while let Some(next) = self.peek_kind() {
            if sync(next) {
                break;
            }
            self.idx += 1;
        }
        self.eat(TokenKind::Symbol(Symbol::Comma));
    }

    /// Span of the current token, or a point at the end of input.
    fn here(&self) -> Span {
        self.peek().map_or_else(|| self.end_span(), |t| t.span)
    }

    fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map(|t| Span::point(t.span.end))
            .unwrap_or_default()
    }

    fn current_description(&self) -> String {
        self.peek()
            .map_or_else(|| "end of input".to_string(), describe)
    }

    fn error_at(&mut self, kind: SyntaxErrorKind, message: String, span: Span) {
        trace!(%kind, at = %span.start, %message, "syntax error");
        self.errors.push(SyntaxError {
            number: self.errors.len() + 1,
            kind,
            message,
            span,
        });
    }
}

/// How a token is named in error messages.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::String => format!("\"{}\"", token.lexeme),
        _ => format!("'{}'", token.lexeme),
    }
}

/// Whether `kind` is one of the closing or separating symbols that end an
/// entry in every list.
fn is_boundary(kind: TokenKind, closer: Symbol) -> bool {
    kind == TokenKind::Symbol(Symbol::Comma) || kind == TokenKind::Symbol(closer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::types::{Phase, Position, Winner};
    use pretty_assertions::assert_eq;

    const VALID: &str = r#"
TORNEO {
    nombre: "Copa Mundial",
    equipos: 2,
    sede: "Guatemala"
}
EQUIPOS {
    equipo: "Leones FC" [
        jugador: "Pedro Martínez" [posicion: DELANTERO, numero: 9, edad: 24],
        jugador: "Luis Pérez" [posicion: "PORTERO", numero: 1, edad: 30]
    ],
    equipo: "Cóndores FC" [
        jugador: "Valeria Cruz" [posicion: MEDIOCAMPO, numero: 10, edad: 22]
    ]
}
ELIMINACION {
    final: [
        partido: "Leones FC" vs "Cóndores FC" [
            resultado: "3-1",
            goleadores: [
                goleador: "Pedro Martínez" [minuto: 15],
                goleador: "Valeria Cruz" [minuto: 40]
            ]
        ]
    ]
}
"#;

    fn parse_source(source: &str) -> Parsed {
        let lexed = tokenize(source);
        assert!(lexed.is_ok(), "lex errors: {:?}", lexed.errors);
        parse(&lexed.tokens)
    }

    fn kinds(parsed: &Parsed) -> Vec<SyntaxErrorKind> {
        parsed.errors.iter().map(|e| e.kind).collect()
    }

    fn wrap(tourney: &str, teams: &str, elimination: &str) -> String {
        format!(
            "TOURNEY {{ {} }} TEAMS {{ {} }} ELIMINATION {{ {} }}",
            tourney, teams, elimination
        )
    }

    #[test]
    fn test_parse_valid_document() {
        let parsed = parse_source(VALID);
        assert!(parsed.succeeded(), "errors: {:?}", parsed.errors);

        let doc = &parsed.document;
        assert_eq!(doc.name, "Copa Mundial");
        assert_eq!(doc.venue, "Guatemala");
        assert_eq!(doc.declared_team_count, 2);
        assert_eq!(doc.teams.len(), 2);

        let leones = &doc.teams[0];
        assert_eq!(leones.name, "Leones FC");
        assert_eq!(leones.players[0].position, Some(Position::Forward));
        assert_eq!(leones.players[0].number, 9);
        assert_eq!(leones.players[1].position, Some(Position::Goalkeeper));
        assert_eq!(leones.players[1].age, Some(30));

        let finals = doc.matches(Phase::Final);
        assert_eq!(finals.len(), 1);
        assert_eq!(finals[0].score, "3-1");
        assert_eq!(finals[0].winner, Winner::Team("Leones FC".to_string()));
        assert_eq!(finals[0].scorers.len(), 2);
        assert_eq!(finals[0].scorers[1].minute, 40);
        assert!(doc.matches(Phase::Quarterfinals).is_empty());
    }

    #[test]
    fn test_english_keywords_and_optional_commas() {
        let source = wrap(
            r#"name: "Cup" teams: 1 venue: "Here""#,
            r#"team: "A" [ player: "P" [position: GOALKEEPER, number: 1, age: 20], ]"#,
            r#"semifinal: [ match: "A" vs "TBD" [ result: "Pending" ] ]"#,
        );
        let parsed = parse_source(&source);
        assert!(parsed.succeeded(), "errors: {:?}", parsed.errors);
        let semis = parsed.document.matches(Phase::Semifinal);
        assert_eq!(semis[0].winner, Winner::Tbd);
        assert_eq!(semis[0].team_b, "TBD");
    }

    #[test]
    fn test_match_without_result_is_pending() {
        let source = wrap(
            "teams: 0",
            "",
            r#"final: [ match: "A" vs "B" [] ]"#,
        );
        let parsed = parse_source(&source);
        assert!(parsed.succeeded(), "errors: {:?}", parsed.errors);
        let m = &parsed.document.matches(Phase::Final)[0];
        assert_eq!(m.score, crate::types::PENDING);
        assert_eq!(m.winner, Winner::Tbd);
    }

    #[test]
    fn test_winner_derivation_cases() {
        let source = wrap(
            "teams: 0",
            "",
            r#"quarterfinals: [
                match: "A" vs "B" [result: "3-1"],
                match: "C" vs "D" [result: "1-3"],
                match: "E" vs "F" [result: "2-2"],
                match: "G" vs "H" [result: "Pendiente"]
            ]"#,
        );
        let parsed = parse_source(&source);
        let winners: Vec<String> = parsed
            .document
            .matches(Phase::Quarterfinals)
            .iter()
            .map(|m| m.winner.to_string())
            .collect();
        assert_eq!(winners, vec!["A", "D", "Draw", "TBD"]);
    }

    #[test]
    fn test_cardinality_mismatch() {
        let source = wrap(
            "equipos: 4",
            r#"equipo: "A" [] equipo: "B" [] equipo: "C" []"#,
            "",
        );
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::CardinalityMismatch]);
        assert_eq!(parsed.document.teams.len(), 3);
        let error = &parsed.errors[0];
        assert_eq!(error.message, "declared 4 teams but 3 were defined");
        assert_eq!((error.line(), error.column()), (1, 20));
    }

    #[test]
    fn test_cardinality_without_declared_count_points_nowhere() {
        let source = wrap("", r#"team: "A" []"#, "");
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::CardinalityMismatch]);
        assert_eq!((parsed.errors[0].line(), parsed.errors[0].column()), (0, 0));
    }

    #[test]
    fn test_unknown_attribute_recovers_at_next_attribute() {
        let source = wrap(r#"name: "Cup", colour: "red" blue, teams: 0"#, "", "");
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnknownAttribute]);
        assert_eq!(parsed.document.name, "Cup");
        assert_eq!(parsed.errors[0].message, "'colour' is not a TOURNEY attribute");
    }

    #[test]
    fn test_unknown_player_attribute() {
        let source = wrap(
            "teams: 1",
            r#"team: "A" [ player: "P" [height: 180, age: 20] ]"#,
            "",
        );
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnknownAttribute]);
        assert_eq!(parsed.document.teams[0].players[0].age, Some(20));
    }

    #[test]
    fn test_unknown_phase_is_unknown_section() {
        let source = wrap(
            "teams: 0",
            "",
            r#"octavos: [ match: "A" vs "B" [] ], final: [ match: "C" vs "D" [] ]"#,
        );
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnknownSection]);
        assert_eq!(parsed.document.matches(Phase::Final).len(), 1);
    }

    #[test]
    fn test_unknown_team_entry_is_unknown_section() {
        let source = wrap("teams: 1", r#"club: "X", team: "A" []"#, "");
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnknownSection]);
        assert_eq!(parsed.document.teams[0].name, "A");
    }

    #[test]
    fn test_non_player_entry_is_unexpected() {
        let source = wrap(
            "teams: 1",
            r#"team: "A" [ "stray", player: "P" [] ]"#,
            "",
        );
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnexpectedToken]);
        assert_eq!(parsed.errors[0].message, "expected 'player', found \"stray\"");
        assert_eq!(parsed.document.teams[0].players.len(), 1);
    }

    #[test]
    fn test_trailing_content_reported_once() {
        let source = format!("{} EXTRA {{ }} more", wrap("teams: 0", "", ""));
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnknownSection]);
        assert_eq!(
            parsed.errors[0].message,
            "unexpected 'EXTRA' after the ELIMINATION block"
        );
    }

    #[test]
    fn test_duplicate_team() {
        let source = wrap("teams: 1", r#"team: "A" [] team: "A" []"#, "");
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::DuplicateTeam]);
        assert_eq!(parsed.document.teams.len(), 1);
    }

    #[test]
    fn test_strict_team_references() {
        let source = wrap(
            "teams: 1",
            r#"team: "A" []"#,
            r#"final: [ match: "A" vs "Ghost" [], match: "A" vs "TBD" [] ]"#,
        );
        let lexed = tokenize(&source);

        let lenient = parse(&lexed.tokens);
        assert!(lenient.succeeded());

        let strict = parse_with(&lexed.tokens, ParseOptions::strict());
        assert_eq!(kinds(&strict), vec![SyntaxErrorKind::UnknownTeamReference]);
        assert!(strict.errors[0].message.contains("Ghost"));
    }

    #[test]
    fn test_number_out_of_range() {
        let source = wrap("teams: 99999999999", "", "");
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnexpectedToken]);
        assert_eq!(parsed.errors[0].message, "number out of range: 99999999999");
        assert_eq!(parsed.document.declared_team_count, 0);
    }

    #[test]
    fn test_invalid_position_string() {
        let source = wrap(
            "teams: 1",
            r#"team: "A" [ player: "P" [posicion: "LIBERO", numero: 5] ]"#,
            "",
        );
        let parsed = parse_source(&source);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnexpectedToken]);
        let player = &parsed.document.teams[0].players[0];
        assert_eq!(player.position, None);
        assert_eq!(player.number, 5);
    }

    #[test]
    fn test_empty_stream_reports_end_of_input_once() {
        let parsed = parse(&[]);
        assert_eq!(kinds(&parsed), vec![SyntaxErrorKind::UnexpectedToken]);
        assert_eq!(
            parsed.errors[0].message,
            "expected 'TOURNEY', found end of input"
        );
        assert_eq!(parsed.document, Tournament::new());
    }

    #[test]
    fn test_truncated_input_terminates() {
        let full = tokenize(VALID).tokens;
        for cut in 0..full.len() {
            let parsed = parse(&full[..cut]);
            assert!(!parsed.succeeded(), "prefix of {} tokens parsed cleanly", cut);
        }
    }

    #[test]
    fn test_arbitrary_streams_terminate() {
        let noise = tokenize(r#"] ] } : , vs "x" 12 team match [ { player scorer"#).tokens;
        for start in 0..noise.len() {
            let _ = parse(&noise[start..]);
            let _ = parse_with(&noise[start..], ParseOptions::strict());
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        let tokens = tokenize(VALID).tokens;
        assert_eq!(parse(&tokens), parse(&tokens));
    }

    #[test]
    fn test_error_numbers_are_sequential() {
        let source = wrap(r#"a: 1, b: 2"#, r#"x y"#, "");
        let parsed = parse_source(&source);
        let numbers: Vec<usize> = parsed.errors.iter().map(|e| e.number).collect();
        let expected: Vec<usize> = (1..=parsed.errors.len()).collect();
        assert_eq!(numbers, expected);
        assert!(parsed.errors.len() >= 2);
    }

    #[test]
    fn test_into_parts() {
        let (doc, errors, ok) = parse_source(VALID).into_parts();
        assert!(ok);
        assert!(errors.is_empty());
        assert_eq!(doc.teams.len(), 2);
    }
}
