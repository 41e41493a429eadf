//! Report command implementation.
//!
//! Prints the summary, standings, scorer and bracket tables of one file.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::discovery::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{render_table, Printer};
use crate::report::{
    bracket, scorer_leaderboard, standings, summarize, BracketRow, ScorerEntry, Standing, Summary,
};
use crate::types::Tournament;

use super::{load_document, output_format, parse_options, print_json};

/// Which report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Summary,
    Standings,
    Scorers,
    Bracket,
    All,
}

impl Section {
    fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}

/// Print tournament reports
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Tournament file
    pub file: PathBuf,

    /// Report to print
    #[arg(long, short, value_enum, default_value = "all")]
    pub section: Section,

    /// Report matches that name teams missing from TEAMS
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Serialize)]
struct Reports {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standings: Option<Vec<Standing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scorers: Option<Vec<ScorerEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bracket: Option<Vec<BracketRow>>,
}

impl Reports {
    fn build(tournament: &Tournament, section: Section) -> Self {
        Self {
            summary: section
                .includes(Section::Summary)
                .then(|| summarize(tournament)),
            standings: section
                .includes(Section::Standings)
                .then(|| standings(tournament)),
            scorers: section
                .includes(Section::Scorers)
                .then(|| scorer_leaderboard(tournament)),
            bracket: section
                .includes(Section::Bracket)
                .then(|| bracket(tournament)),
        }
    }

    fn render_text(&self) -> String {
        let mut blocks = Vec::new();

        if let Some(s) = &self.summary {
            let rows = vec![
                row(["Tournament", s.name.as_str()]),
                row(["Venue", s.venue.as_str()]),
                row(["Teams", &s.team_count.to_string()]),
                row(["Matches scheduled", &s.match_count.to_string()]),
                row(["Matches completed", &s.completed_matches.to_string()]),
                row(["Total goals", &s.total_goals.to_string()]),
                row(["Goals per match", &format!("{:.2}", s.average_goals)]),
                row([
                    "Average player age",
                    &s.average_age.map_or_else(|| "N/A".to_string(), |a| format!("{:.2}", a)),
                ]),
                row([
                    "Current phase",
                    s.current_phase.map_or("Finished", |p| p.label()),
                ]),
            ];
            blocks.push(render_table(&["Statistic", "Value"], &rows));
        }

        if let Some(standings) = &self.standings {
            let rows: Vec<Vec<String>> = standings
                .iter()
                .map(|s| {
                    vec![
                        s.team.clone(),
                        s.played.to_string(),
                        s.won.to_string(),
                        s.lost.to_string(),
                        s.goals_for.to_string(),
                        s.goals_against.to_string(),
                        s.goal_difference.to_string(),
                        s.phase_reached.map_or("-", |p| p.label()).to_string(),
                    ]
                })
                .collect();
            blocks.push(render_table(
                &["Team", "P", "W", "L", "GF", "GA", "GD", "Phase"],
                &rows,
            ));
        }

        if let Some(scorers) = &self.scorers {
            let rows: Vec<Vec<String>> = scorers
                .iter()
                .map(|e| {
                    let minutes: Vec<String> = e.minutes.iter().map(|m| format!("{}'", m)).collect();
                    vec![
                        e.rank.to_string(),
                        e.player.clone(),
                        e.team.clone().unwrap_or_else(|| "-".to_string()),
                        e.goals.to_string(),
                        minutes.join(", "),
                    ]
                })
                .collect();
            blocks.push(render_table(&["#", "Player", "Team", "Goals", "Minutes"], &rows));
        }

        if let Some(bracket) = &self.bracket {
            let rows: Vec<Vec<String>> = bracket
                .iter()
                .map(|b| {
                    vec![
                        b.phase.label().to_string(),
                        b.team_a.clone(),
                        b.score.clone(),
                        b.team_b.clone(),
                        b.winner.clone(),
                    ]
                })
                .collect();
            blocks.push(render_table(
                &["Phase", "Team A", "Score", "Team B", "Winner"],
                &rows,
            ));
        }

        blocks.join("\n")
    }
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

pub fn run(args: ReportArgs, config: &Config, printer: &Printer) -> Result<()> {
    let options = parse_options(args.strict, config);
    let analysis = load_document(&args.file, options, printer)?;
    let Some(tournament) = analysis.document() else {
        return Ok(());
    };

    let reports = Reports::build(tournament, args.section);
    match output_format(args.format, config) {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Text => print!("{}", reports.render_text()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixture;

    #[test]
    fn test_build_single_section() {
        let reports = Reports::build(&fixture::tournament(), Section::Scorers);
        assert!(reports.summary.is_none());
        assert!(reports.scorers.is_some());

        let json = serde_json::to_value(&reports).unwrap();
        assert!(json.get("summary").is_none());
        assert_eq!(json["scorers"][0]["player"], "Pedro");
    }

    #[test]
    fn test_render_summary_text() {
        let text = Reports::build(&fixture::tournament(), Section::Summary).render_text();
        assert!(text.contains("Goals per match     3.50"));
        assert!(text.contains("Current phase       Final"));
    }

    #[test]
    fn test_render_all_sections() {
        let text = Reports::build(&fixture::tournament(), Section::All).render_text();
        assert!(text.contains("Statistic"));
        assert!(text.contains("GD"));
        assert!(text.contains("Minutes"));
        assert!(text.contains("Winner"));
        assert!(text.contains("15', 45'"));
    }
}
