//! Knockout phases, matches and scorers.
//!
//! A match's winner is never read from input: it is derived from the score
//! string every time a [`Match`] is constructed.

use std::fmt;

use serde::{Serialize, Serializer};

/// Score sentinel for a match that has not been played.
pub const PENDING: &str = "Pending";

/// Placeholder used for undecided winners and for unknown opponents.
pub const TBD: &str = "TBD";

/// Winner label for a level score.
pub const DRAW: &str = "Draw";

/// A knockout phase, in bracket order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Quarterfinals,
    Semifinal,
    Final,
}

impl Phase {
    /// All phases, earliest first.
    pub const ALL: [Phase; 3] = [Phase::Quarterfinals, Phase::Semifinal, Phase::Final];

    /// Lowercase key used in serialized output (`quarterfinals`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Phase::Quarterfinals => "quarterfinals",
            Phase::Semifinal => "semifinal",
            Phase::Final => "final",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Quarterfinals => "Quarterfinals",
            Phase::Semifinal => "Semifinal",
            Phase::Final => "Final",
        }
    }

    /// The phase that winners of this phase advance to.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Quarterfinals => Some(Phase::Semifinal),
            Phase::Semifinal => Some(Phase::Final),
            Phase::Final => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a `"G-G"` score into goals for each side.
///
/// Returns `None` for the pending sentinel and for anything that is not
/// exactly two runs of ASCII digits separated by `-`.
pub fn parse_score(score: &str) -> Option<(u32, u32)> {
    let mut parts = score.split('-');
    let home = goals(parts.next()?)?;
    let away = goals(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((home, away))
}

fn goals(side: &str) -> Option<u32> {
    let side = side.trim();
    if side.is_empty() || !side.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    side.parse().ok()
}

/// Outcome of a match as derived from its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    /// Name of the winning team.
    Team(String),
    Draw,
    /// Not played yet, or the score could not be read.
    Tbd,
}

impl Winner {
    /// Derive the winner of `team_a` vs `team_b` from a score string.
    pub fn from_score(team_a: &str, team_b: &str, score: &str) -> Self {
        match parse_score(score) {
            Some((a, b)) if a > b => Winner::Team(team_a.to_string()),
            Some((a, b)) if b > a => Winner::Team(team_b.to_string()),
            Some(_) => Winner::Draw,
            None => Winner::Tbd,
        }
    }

    /// Winning team name, if there is one.
    pub fn team(&self) -> Option<&str> {
        match self {
            Winner::Team(name) => Some(name),
            Winner::Draw | Winner::Tbd => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Team(name) => f.write_str(name),
            Winner::Draw => f.write_str(DRAW),
            Winner::Tbd => f.write_str(TBD),
        }
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A goal credited to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorer {
    pub player: String,
    pub minute: u32,
}

impl Scorer {
    pub fn new(player: impl Into<String>, minute: u32) -> Self {
        Self {
            player: player.into(),
            minute,
        }
    }
}

/// A single knockout match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub team_a: String,
    pub team_b: String,
    /// Raw score text: `"G-G"` or a pending sentinel.
    pub score: String,
    pub scorers: Vec<Scorer>,
    /// Derived from `score` at construction.
    pub winner: Winner,
}

impl Match {
    /// Build a match, deriving the winner from the score.
    pub fn new(
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        score: impl Into<String>,
        scorers: Vec<Scorer>,
    ) -> Self {
        let team_a = team_a.into();
        let team_b = team_b.into();
        let score = score.into();
        let winner = Winner::from_score(&team_a, &team_b, &score);
        Self {
            team_a,
            team_b,
            score,
            scorers,
            winner,
        }
    }

    /// A match that has not been played yet.
    pub fn pending(team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self::new(team_a, team_b, PENDING, Vec::new())
    }

    /// Goals scored by (team A, team B), when the score is readable.
    pub fn goals(&self) -> Option<(u32, u32)> {
        parse_score(&self.score)
    }

    /// Whether the match has a readable final score.
    pub fn is_completed(&self) -> bool {
        self.goals().is_some()
    }

    /// Whether `team` plays in this match.
    pub fn involves(&self, team: &str) -> bool {
        self.team_a == team || self.team_b == team
    }
}
