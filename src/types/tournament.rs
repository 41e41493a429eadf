//! The tournament document produced by the parser.

use std::collections::BTreeMap;

use serde::Serialize;

use super::bracket::{Match, Phase};
use super::team::Team;

/// A parsed tournament.
///
/// Built once per parse and only read afterwards; reports and emitters take
/// it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tournament {
    pub name: String,
    pub venue: String,
    /// Team count declared in the TOURNEY block.
    pub declared_team_count: u32,
    /// Teams in definition order.
    pub teams: Vec<Team>,
    /// Matches per phase, in definition order. Every phase is present.
    pub phases: BTreeMap<Phase, Vec<Match>>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self {
            name: String::new(),
            venue: String::new(),
            declared_team_count: 0,
            teams: Vec::new(),
            phases: Phase::ALL.iter().map(|&p| (p, Vec::new())).collect(),
        }
    }
}

impl Tournament {
    /// Create an empty tournament with all phases present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a team by name.
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    /// Whether a team with this name is defined.
    pub fn has_team(&self, name: &str) -> bool {
        self.team(name).is_some()
    }

    /// Matches of one phase.
    pub fn matches(&self, phase: Phase) -> &[Match] {
        self.phases.get(&phase).map_or(&[], |m| m.as_slice())
    }

    /// All matches with their phase, in bracket order.
    pub fn all_matches(&self) -> impl Iterator<Item = (Phase, &Match)> {
        self.phases
            .iter()
            .flat_map(|(&phase, matches)| matches.iter().map(move |m| (phase, m)))
    }

    /// Total number of scheduled matches.
    pub fn match_count(&self) -> usize {
        self.phases.values().map(Vec::len).sum()
    }

    /// Team whose roster lists a player with this name.
    pub fn team_of_player(&self, player: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.player(player).is_some())
    }

    pub(crate) fn push_match(&mut self, phase: Phase, m: Match) {
        self.phases.entry(phase).or_default().push(m);
    }
}
