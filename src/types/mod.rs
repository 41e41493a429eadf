//! Tournament document types.

mod bracket;
mod team;
mod tournament;

pub use bracket::{parse_score, Match, Phase, Scorer, Winner, DRAW, PENDING, TBD};
pub use team::{Player, Position, Team};
pub use tournament::Tournament;
