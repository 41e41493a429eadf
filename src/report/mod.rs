//! Read-only views over a parsed [`Tournament`](crate::types::Tournament).
//!
//! Every report takes the document by shared reference and returns plain
//! serializable rows; formatting for the terminal lives in the CLI.

mod bracket;
pub mod dot;
mod scorers;
mod standings;
mod summary;

pub use bracket::{bracket, BracketRow};
pub use scorers::{scorer_leaderboard, ScorerEntry};
pub use standings::{standings, Standing};
pub use summary::{summarize, Summary};
