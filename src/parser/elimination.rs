//! The `ELIMINATION { ... }` block: phases, matches and scorers.

use super::{is_boundary, Parser};
use crate::diagnostic::SyntaxErrorKind;
use crate::lexer::{Attribute, Keyword, Symbol, TokenKind};
use crate::span::Span;
use crate::types::{Match, Phase, Scorer, PENDING, TBD};

/// Name given to a side whose team name is missing or malformed.
const UNNAMED_SIDE: &str = "Unknown";

fn phase_of(kind: TokenKind) -> Option<Phase> {
    match kind {
        TokenKind::Keyword(keyword) => keyword.phase(),
        _ => None,
    }
}

fn is_match_attribute(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Attribute(Attribute::Result | Attribute::Scorers)
    )
}

impl<'t> Parser<'t> {
    pub(super) fn elimination_block(&mut self) {
        self.expect(TokenKind::Keyword(Keyword::Elimination), "'ELIMINATION'");
        self.expect_symbol(Symbol::LBrace);

        while !self.at_eof() && !self.at_symbol(Symbol::RBrace) {
            if let Some(phase) = self.peek_kind().and_then(phase_of) {
                self.phase_def(phase);
                self.eat(TokenKind::Symbol(Symbol::Comma));
            } else {
                let message = format!(
                    "{} is not a phase; expected 'quarterfinals', 'semifinal' or 'final'",
                    self.current_description()
                );
                self.recover(SyntaxErrorKind::UnknownSection, message, |k| {
                    phase_of(k).is_some() || is_boundary(k, Symbol::RBrace)
                });
            }
        }

        self.expect_symbol(Symbol::RBrace);
    }

    fn phase_def(&mut self, phase: Phase) {
        self.bump();
        self.expect_symbol(Symbol::Colon);
        self.expect_symbol(Symbol::LBracket);

        while !self.at_eof() && !self.at_symbol(Symbol::RBracket) {
            if self.at(TokenKind::Keyword(Keyword::Match)) {
                let m = self.match_def();
                self.document.push_match(phase, m);
                self.eat(TokenKind::Symbol(Symbol::Comma));
            } else {
                let message = format!("expected 'match', found {}", self.current_description());
                self.recover(SyntaxErrorKind::UnexpectedToken, message, |k| {
                    k == TokenKind::Keyword(Keyword::Match) || is_boundary(k, Symbol::RBracket)
                });
            }
        }

        self.expect_symbol(Symbol::RBracket);
    }

    fn match_def(&mut self) -> Match {
        self.bump();
        self.expect_symbol(Symbol::Colon);
        let team_a = self.side("the first team");
        self.expect(TokenKind::Vs, "'vs'");
        let team_b = self.side("the second team");
        self.expect_symbol(Symbol::LBracket);

        let mut score = PENDING.to_string();
        let mut scorers = Vec::new();
        while !self.at_eof() && !self.at_symbol(Symbol::RBracket) {
            match self.peek_kind() {
                Some(TokenKind::Attribute(Attribute::Result)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    if let Some((result, _)) = self.expect_string("a result such as \"2-1\"") {
                        score = result;
                    }
                }
                Some(TokenKind::Attribute(Attribute::Scorers)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    scorers.extend(self.scorer_list());
                }
                _ => {
                    let message =
                        format!("{} is not a match attribute", self.current_description());
                    self.recover(SyntaxErrorKind::UnknownAttribute, message, |k| {
                        is_match_attribute(k) || is_boundary(k, Symbol::RBracket)
                    });
                    continue;
                }
            }
            self.eat(TokenKind::Symbol(Symbol::Comma));
        }
        self.expect_symbol(Symbol::RBracket);

        Match::new(team_a, team_b, score, scorers)
    }

    /// One side of a match; checked against `TEAMS` in strict mode.
    fn side(&mut self, what: &str) -> String {
        let Some((name, span)) = self.expect_string(what) else {
            return UNNAMED_SIDE.to_string();
        };
        if self.options.strict_team_refs && name != TBD && !self.document.has_team(&name) {
            self.unknown_team(&name, span);
        }
        name
    }

    fn unknown_team(&mut self, name: &str, span: Span) {
        self.error_at(
            SyntaxErrorKind::UnknownTeamReference,
            format!("team '{}' is not defined in TEAMS", name),
            span,
        );
    }

    fn scorer_list(&mut self) -> Vec<Scorer> {
        let mut scorers = Vec::new();
        if !self.expect_symbol(Symbol::LBracket) {
            return scorers;
        }

        while !self.at_eof() && !self.at_symbol(Symbol::RBracket) {
            if self.at(TokenKind::Keyword(Keyword::Scorer)) {
                scorers.push(self.scorer_def());
                self.eat(TokenKind::Symbol(Symbol::Comma));
            } else {
                let message = format!("expected 'scorer', found {}", self.current_description());
                self.recover(SyntaxErrorKind::UnexpectedToken, message, |k| {
                    k == TokenKind::Keyword(Keyword::Scorer) || is_boundary(k, Symbol::RBracket)
                });
            }
        }

        self.expect_symbol(Symbol::RBracket);
        scorers
    }

    fn scorer_def(&mut self) -> Scorer {
        self.bump();
        self.expect_symbol(Symbol::Colon);
        let player = self
            .expect_string("a player name")
            .map(|(name, _)| name)
            .unwrap_or_default();
        let mut minute = 0;
        self.expect_symbol(Symbol::LBracket);

        while !self.at_eof() && !self.at_symbol(Symbol::RBracket) {
            if self.eat(TokenKind::Attribute(Attribute::Minute)) {
                self.expect_symbol(Symbol::Colon);
                if let Some(m) = self.expect_number("a minute") {
                    minute = m;
                }
                self.eat(TokenKind::Symbol(Symbol::Comma));
            } else {
                let message = format!("{} is not a scorer attribute", self.current_description());
                self.recover(SyntaxErrorKind::UnknownAttribute, message, |k| {
                    k == TokenKind::Attribute(Attribute::Minute) || is_boundary(k, Symbol::RBracket)
                });
            }
        }

        self.expect_symbol(Symbol::RBracket);
        Scorer::new(player, minute)
    }
}
