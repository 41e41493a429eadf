use std::cmp::Reverse;

use serde::Serialize;

use crate::types::{Phase, Tournament};

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    /// Latest phase the team is scheduled in.
    pub phase_reached: Option<Phase>,
}

impl Standing {
    fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            played: 0,
            won: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            phase_reached: None,
        }
    }
}

/// Per-team results for every team defined in `TEAMS`.
///
/// Only completed matches count toward played/won/lost and goals; a draw
/// counts as played but neither won nor lost. Rows are ordered by wins,
/// most first, keeping definition order among equals.
pub fn standings(tournament: &Tournament) -> Vec<Standing> {
    let mut rows: Vec<Standing> = tournament
        .teams
        .iter()
        .map(|team| {
            let mut row = Standing::new(&team.name);
            for (phase, m) in tournament.all_matches() {
                if !m.involves(&team.name) {
                    continue;
                }
                row.phase_reached = row.phase_reached.max(Some(phase));

                let Some((a, b)) = m.goals() else {
                    continue;
                };
                let (scored, conceded) = if m.team_a == team.name { (a, b) } else { (b, a) };
                row.played += 1;
                row.goals_for = row.goals_for.saturating_add(u64::from(scored));
                row.goals_against = row.goals_against.saturating_add(u64::from(conceded));
                row.goal_difference = row
                    .goal_difference
                    .saturating_add(i64::from(scored) - i64::from(conceded));
                if scored > conceded {
                    row.won += 1;
                } else if scored < conceded {
                    row.lost += 1;
                }
            }
            row
        })
        .collect();

    rows.sort_by_key(|row| Reverse(row.won));
    rows
}
