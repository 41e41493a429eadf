//! The `TEAMS { ... }` block: team rosters and player attributes.

use super::{describe, is_boundary, Parser};
use crate::diagnostic::SyntaxErrorKind;
use crate::lexer::{Attribute, Keyword, Symbol, TokenKind};
use crate::types::{Player, Position, Team};

/// Name given to a team whose name is missing or malformed.
const UNNAMED_TEAM: &str = "Unknown team";

fn is_player_attribute(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Attribute(Attribute::Position | Attribute::Number | Attribute::Age)
    )
}

impl<'t> Parser<'t> {
    pub(super) fn teams_block(&mut self) {
        self.expect(TokenKind::Keyword(Keyword::Teams), "'TEAMS'");
        self.expect_symbol(Symbol::LBrace);

        while !self.at_eof() && !self.at_symbol(Symbol::RBrace) {
            if self.at(TokenKind::Keyword(Keyword::Team)) {
                self.team_def();
                self.eat(TokenKind::Symbol(Symbol::Comma));
            } else {
                let message = format!("{} is not a team definition", self.current_description());
                self.recover(SyntaxErrorKind::UnknownSection, message, |k| {
                    k == TokenKind::Keyword(Keyword::Team) || is_boundary(k, Symbol::RBrace)
                });
            }
        }

        self.expect_symbol(Symbol::RBrace);
    }

    fn team_def(&mut self) {
        self.bump();
        self.expect_symbol(Symbol::Colon);
        let name = self.expect_string("a team name");
        self.expect_symbol(Symbol::LBracket);

        let mut players = Vec::new();
        while !self.at_eof() && !self.at_symbol(Symbol::RBracket) {
            if self.at(TokenKind::Keyword(Keyword::Player)) {
                players.push(self.player_def());
                self.eat(TokenKind::Symbol(Symbol::Comma));
            } else {
                let message = format!("expected 'player', found {}", self.current_description());
                self.recover(SyntaxErrorKind::UnexpectedToken, message, |k| {
                    k == TokenKind::Keyword(Keyword::Player) || is_boundary(k, Symbol::RBracket)
                });
            }
        }
        self.expect_symbol(Symbol::RBracket);

        match name {
            Some((name, span)) if self.document.has_team(&name) => {
                self.error_at(
                    SyntaxErrorKind::DuplicateTeam,
                    format!("team '{}' is already defined", name),
                    span,
                );
            }
            Some((name, _)) => self.document.teams.push(Team::new(name, players)),
            None => self.document.teams.push(Team::new(UNNAMED_TEAM, players)),
        }
    }

    fn player_def(&mut self) -> Player {
        self.bump();
        self.expect_symbol(Symbol::Colon);
        let name = self
            .expect_string("a player name")
            .map(|(name, _)| name)
            .unwrap_or_default();
        let mut player = Player::new(name);
        self.expect_symbol(Symbol::LBracket);

        while !self.at_eof() && !self.at_symbol(Symbol::RBracket) {
            match self.peek_kind() {
                Some(TokenKind::Attribute(Attribute::Position)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    if let Some(position) = self.position_value() {
                        player.position = Some(position);
                    }
                }
                Some(TokenKind::Attribute(Attribute::Number)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    if let Some(number) = self.expect_number("a shirt number") {
                        player.number = number;
                    }
                }
                Some(TokenKind::Attribute(Attribute::Age)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    if let Some(age) = self.expect_number("an age") {
                        player.age = Some(age);
                    }
                }
                _ => {
                    let message =
                        format!("{} is not a player attribute", self.current_description());
                    self.recover(SyntaxErrorKind::UnknownAttribute, message, |k| {
                        is_player_attribute(k) || is_boundary(k, Symbol::RBracket)
                    });
                    continue;
                }
            }
            self.eat(TokenKind::Symbol(Symbol::Comma));
        }

        self.expect_symbol(Symbol::RBracket);
        player
    }

    /// A position word, or a string that spells one.
    fn position_value(&mut self) -> Option<Position> {
        match self.peek_kind() {
            Some(TokenKind::Position(position)) => {
                self.bump();
                Some(position)
            }
            Some(TokenKind::String) => {
                let token = self.bump()?;
                let position = Position::from_word(&token.lexeme);
                if position.is_none() {
                    self.error_at(
                        SyntaxErrorKind::UnexpectedToken,
                        format!("{} is not a playing position", describe(token)),
                        token.span,
                    );
                }
                position
            }
            _ => {
                self.unexpected("a playing position");
                None
            }
        }
    }
}
