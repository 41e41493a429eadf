//! Character cursor with line/column bookkeeping.

use crate::span::Location;

/// Walks source text one `char` at a time.
///
/// A newline moves to column 1 of the next line. A carriage return moves
/// nothing, so `\r\n` counts as a single line break.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character under the cursor, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Consume the current character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.offset += ch.len_utf8();
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\r' => {}
            _ => self.column += 1,
        }
        Some(ch)
    }

    /// Consume characters while `f` holds.
    pub fn advance_while<F>(&mut self, f: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some(ch) = self.current() {
            if !f(ch) {
                break;
            }
            self.advance();
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.offset, self.line, self.column)
    }

    /// Source text between `start` and the cursor.
    pub fn slice_from(&self, start: Location) -> &'a str {
        &self.source[start.offset..self.offset]
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }
}
