use serde::Serialize;

use crate::types::{Phase, Tournament};

/// General information about a tournament.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub name: String,
    pub venue: String,
    pub team_count: usize,
    pub match_count: usize,
    pub completed_matches: usize,
    pub total_goals: u64,
    /// Goals per completed match; zero when nothing has been played.
    pub average_goals: f64,
    /// Mean over the players that declare an age; `None` when none do.
    pub average_age: Option<f64>,
    /// Earliest phase that still has an undecided match.
    pub current_phase: Option<Phase>,
}

pub fn summarize(tournament: &Tournament) -> Summary {
    let mut completed = 0;
    let mut total_goals: u64 = 0;
    for (_, m) in tournament.all_matches() {
        if let Some((a, b)) = m.goals() {
            completed += 1;
            total_goals = total_goals.saturating_add(u64::from(a) + u64::from(b));
        }
    }

    let ages: Vec<u32> = tournament
        .teams
        .iter()
        .flat_map(|t| t.players.iter().filter_map(|p| p.age))
        .collect();
    let average_age = if ages.is_empty() {
        None
    } else {
        Some(ages.iter().map(|&a| f64::from(a)).sum::<f64>() / ages.len() as f64)
    };

    let average_goals = if completed == 0 {
        0.0
    } else {
        total_goals as f64 / completed as f64
    };

    let current_phase = Phase::ALL.into_iter().find(|&phase| {
        tournament
            .matches(phase)
            .iter()
            .any(|m| !m.is_completed())
    });

    Summary {
        name: tournament.name.clone(),
        venue: tournament.venue.clone(),
        team_count: tournament.teams.len(),
        match_count: tournament.match_count(),
        completed_matches: completed,
        total_goals,
        average_goals,
        average_age,
        current_phase,
    }
}
