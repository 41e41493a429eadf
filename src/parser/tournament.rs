//! The `TOURNEY { ... }` header block.

use super::{is_boundary, Parser};
use crate::diagnostic::SyntaxErrorKind;
use crate::lexer::{Attribute, Keyword, Symbol, TokenKind};

fn is_header_attribute(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Attribute(Attribute::Name | Attribute::TeamCount | Attribute::Venue)
    )
}

impl<'t> Parser<'t> {
    pub(super) fn tournament_block(&mut self) {
        self.expect(TokenKind::Keyword(Keyword::Tournament), "'TOURNEY'");
        self.expect_symbol(Symbol::LBrace);

        while !self.at_eof() && !self.at_symbol(Symbol::RBrace) {
            match self.peek_kind() {
                Some(TokenKind::Attribute(Attribute::Name)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    if let Some((name, _)) = self.expect_string("a tournament name") {
                        self.document.name = name;
                    }
                }
                Some(TokenKind::Attribute(Attribute::TeamCount)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    let span = self.here();
                    if let Some(count) = self.expect_number("a team count") {
                        self.document.declared_team_count = count;
                        self.team_count_span = Some(span);
                    }
                }
                Some(TokenKind::Attribute(Attribute::Venue)) => {
                    self.bump();
                    self.expect_symbol(Symbol::Colon);
                    if let Some((venue, _)) = self.expect_string("a venue") {
                        self.document.venue = venue;
                    }
                }
                _ => {
                    let message =
                        format!("{} is not a TOURNEY attribute", self.current_description());
                    self.recover(SyntaxErrorKind::UnknownAttribute, message, |k| {
                        is_header_attribute(k) || is_boundary(k, Symbol::RBrace)
                    });
                    continue;
                }
            }
            self.eat(TokenKind::Symbol(Symbol::Comma));
        }

        self.expect_symbol(Symbol::RBrace);
    }
}
