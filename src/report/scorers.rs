use serde::Serialize;

use crate::types::Tournament;

/// One row of the scorer leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerEntry {
    /// Competition rank: tied players share a rank and the next rank skips.
    pub rank: usize,
    pub player: String,
    /// Team whose roster lists the player, if any.
    pub team: Option<String>,
    pub goals: u32,
    /// Minute of each goal, in match order.
    pub minutes: Vec<u32>,
}

/// Goals per player across every match, best first.
///
/// Ties on goals are broken by player name; tied players share a rank
/// (1, 1, 3).
pub fn scorer_leaderboard(tournament: &Tournament) -> Vec<ScorerEntry> {
    let mut entries: Vec<ScorerEntry> = Vec::new();
    for (_, m) in tournament.all_matches() {
        for scorer in &m.scorers {
            match entries.iter_mut().find(|e| e.player == scorer.player) {
                Some(entry) => {
                    entry.goals += 1;
                    entry.minutes.push(scorer.minute);
                }
                None => entries.push(ScorerEntry {
                    rank: 0,
                    player: scorer.player.clone(),
                    team: tournament
                        .team_of_player(&scorer.player)
                        .map(|t| t.name.clone()),
                    goals: 1,
                    minutes: vec![scorer.minute],
                }),
            }
        }
    }

    entries.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.player.cmp(&b.player)));

    let mut previous: Option<(u32, usize)> = None;
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = match previous {
            Some((goals, rank)) if goals == entry.goals => rank,
            _ => idx + 1,
        };
        previous = Some((entry.goals, entry.rank));
    }

    entries
}
