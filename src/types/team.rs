//! Teams and their player rosters.

use std::fmt;

use serde::Serialize;

/// Playing position of a squad member.
///
/// Source files may spell positions in Spanish (`PORTERO`, `DEFENSA`,
/// `MEDIOCAMPO`, `DELANTERO`) or English (`GOALKEEPER`, `DEFENDER`,
/// `MIDFIELDER`, `FORWARD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions, from the back line forward.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Look up a position word in either spelling.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "PORTERO" | "GOALKEEPER" => Some(Position::Goalkeeper),
            "DEFENSA" | "DEFENDER" => Some(Position::Defender),
            "MEDIOCAMPO" | "MIDFIELDER" => Some(Position::Midfielder),
            "DELANTERO" | "FORWARD" => Some(Position::Forward),
            _ => None,
        }
    }

    /// Canonical (English) spelling.
    pub fn name(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GOALKEEPER",
            Position::Defender => "DEFENDER",
            Position::Midfielder => "MIDFIELDER",
            Position::Forward => "FORWARD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A squad member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    /// `None` when the definition omits the `position` attribute.
    pub position: Option<Position>,
    /// Shirt number.
    pub number: u32,
    /// `None` when the definition omits the `age` attribute.
    pub age: Option<u32>,
}

impl Player {
    /// Create a player with no position or age and a zeroed number.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            number: 0,
            age: None,
        }
    }
}

/// A team and its roster, in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    /// Team name (unique within a tournament).
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    /// Find a player on this roster by name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_either_spelling() {
        assert_eq!(Position::from_word("PORTERO"), Some(Position::Goalkeeper));
        assert_eq!(Position::from_word("GOALKEEPER"), Some(Position::Goalkeeper));
        assert_eq!(Position::from_word("MEDIOCAMPO"), Some(Position::Midfielder));
        assert_eq!(Position::from_word("FORWARD"), Some(Position::Forward));
        assert_eq!(Position::from_word("portero"), None);
        assert_eq!(Position::from_word("STRIKER"), None);
    }

    #[test]
    fn test_position_round_trips_through_name() {
        for position in Position::ALL {
            assert_eq!(Position::from_word(position.name()), Some(position));
        }
    }

    #[test]
    fn test_team_player_lookup() {
        let team = Team::new(
            "Leones FC",
            vec![Player::new("Carlos Ruiz"), Player::new("Mario López")],
        );
        assert!(team.player("Mario López").is_some());
        assert!(team.player("Nobody").is_none());
    }
}
