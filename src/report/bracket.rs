use serde::Serialize;

use crate::types::{Phase, Tournament};

/// One match as shown in the bracket table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketRow {
    pub phase: Phase,
    pub team_a: String,
    pub team_b: String,
    pub score: String,
    /// Winning team, `Draw` or `TBD`.
    pub winner: String,
}

/// Every match in phase order, then definition order.
pub fn bracket(tournament: &Tournament) -> Vec<BracketRow> {
    tournament
        .all_matches()
        .map(|(phase, m)| BracketRow {
            phase,
            team_a: m.team_a.clone(),
            team_b: m.team_b.clone(),
            score: m.score.clone(),
            winner: m.winner.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixture;

    #[test]
    fn test_bracket_rows() {
        let rows = bracket(&fixture::tournament());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].phase, Phase::Semifinal);
        assert_eq!(rows[0].winner, "Leones");
        assert_eq!(rows[1].winner, "Cóndores");
        assert_eq!(rows[2].phase, Phase::Final);
        assert_eq!(rows[2].score, "Pending");
        assert_eq!(rows[2].winner, "TBD");
    }

    #[test]
    fn test_bracket_serializes_phase_key() {
        let rows = bracket(&fixture::tournament());
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[2]["phase"], "final");
    }
}
