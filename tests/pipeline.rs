//! End-to-end tests over the fixture tournaments.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use tourney::report::{bracket, dot::to_dot, scorer_leaderboard, standings, summarize};
use tourney::{
    analyze, parse, tokenize, LexErrorKind, ParseOptions, Phase, Position, SyntaxErrorKind, Winner,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

#[test]
fn test_copa_is_clean() {
    let source = load_fixture("copa.tourney");
    let analysis = analyze(&source, ParseOptions::strict());
    assert!(analysis.is_clean(), "{:#?}", analysis.syntax_errors());

    let doc = analysis.document().unwrap();
    assert_eq!(doc.name, "Copa Mundial Universitaria");
    assert_eq!(doc.venue, "Guatemala");
    assert_eq!(doc.declared_team_count, 4);

    let names: Vec<&str> = doc.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Leones FC", "Águilas United", "Cóndores FC", "Tigres Academy"]
    );
    assert_eq!(doc.teams[0].players[0].position, Some(Position::Goalkeeper));
    assert_eq!(doc.teams[2].players[0].position, Some(Position::Defender));
    assert_eq!(doc.matches(Phase::Quarterfinals).len(), 2);
    assert_eq!(
        doc.matches(Phase::Semifinal)[0].winner,
        Winner::Team("Leones FC".to_string())
    );
    assert_eq!(doc.matches(Phase::Final)[0].winner, Winner::Tbd);
}

#[test]
fn test_copa_token_positions() {
    let source = load_fixture("copa.tourney");
    let lexed = tokenize(&source);
    assert!(lexed.is_ok());

    let first = &lexed.tokens[0];
    assert_eq!((first.lexeme.as_str(), first.line(), first.column()), ("TORNEO", 1, 1));

    let name = &lexed.tokens[4];
    assert_eq!(name.lexeme, "Copa Mundial Universitaria");
    assert_eq!((name.line(), name.column()), (2, 11));
}

#[test]
fn test_copa_reports() {
    let source = load_fixture("copa.tourney");
    let doc = analyze(&source, ParseOptions::default())
        .parsed
        .unwrap()
        .document;

    let summary = summarize(&doc);
    assert_eq!(summary.team_count, 4);
    assert_eq!(summary.match_count, 4);
    assert_eq!(summary.completed_matches, 3);
    assert_eq!(summary.total_goals, 7);
    assert_eq!(summary.current_phase, Some(Phase::Final));
    assert!((summary.average_age.unwrap() - 244.0 / 9.0).abs() < 1e-9);

    let table: Vec<(String, u32, u32, u32, i64)> = standings(&doc)
        .into_iter()
        .map(|s| (s.team, s.played, s.won, s.lost, s.goal_difference))
        .collect();
    assert_eq!(
        table,
        vec![
            ("Leones FC".to_string(), 2, 2, 0, 3),
            ("Águilas United".to_string(), 2, 1, 1, 1),
            ("Cóndores FC".to_string(), 1, 0, 1, -2),
            ("Tigres Academy".to_string(), 1, 0, 1, -2),
        ]
    );

    let scorers: Vec<(usize, String, Option<String>, u32)> = scorer_leaderboard(&doc)
        .into_iter()
        .map(|e| (e.rank, e.player, e.team, e.goals))
        .collect();
    assert_eq!(scorers[0], (1, "Pedro Martínez".to_string(), Some("Leones FC".to_string()), 2));
    let ranks: Vec<usize> = scorers.iter().map(|s| s.0).collect();
    assert_eq!(ranks, vec![1, 2, 2, 2, 2]);
    assert_eq!(scorers[1].1, "Diego Ramírez");

    let rows = bracket(&doc);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].phase, Phase::Final);
    assert_eq!(rows[3].winner, "TBD");

    let dot = to_dot(&doc);
    for edge in ["P1 -> P3;", "P2 -> P3;", "P3 -> P4;"] {
        assert!(dot.contains(edge), "missing {}", edge);
    }
    assert!(dot.contains("P4 [label=\"Leones FC\\nPendiente\\nTBD\"];"));
}

#[test]
fn test_spring_cup_english_keywords() {
    let source = load_fixture("spring-cup.tourney");
    let analysis = analyze(&source, ParseOptions::default());
    assert!(analysis.is_clean(), "{:#?}", analysis.syntax_errors());

    let doc = analysis.document().unwrap();
    let semi = &doc.matches(Phase::Semifinal)[0];
    assert_eq!(semi.winner, Winner::Draw);
    assert_eq!(semi.scorers.len(), 4);

    let table: Vec<String> = standings(doc).into_iter().map(|s| s.team).collect();
    assert_eq!(table, vec!["Harbor City", "North End", "Old Town", "West Side"]);

    let ranks: Vec<usize> = scorer_leaderboard(doc).iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 1]);
}

#[test]
fn test_spring_cup_strict_reports_unknown_team() {
    let source = load_fixture("spring-cup.tourney");
    let analysis = analyze(&source, ParseOptions::strict());
    let errors = analysis.syntax_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, SyntaxErrorKind::UnknownTeamReference);
    assert_eq!(errors[0].line(), 34);
}

#[test]
fn test_broken_fixture_stops_at_lexing() {
    let source = load_fixture("broken.tourney");
    let analysis = analyze(&source, ParseOptions::default());
    assert!(analysis.parsed.is_none());

    let found: Vec<(LexErrorKind, u32, u32)> = analysis
        .lex_errors
        .iter()
        .map(|e| (e.kind, e.line(), e.column()))
        .collect();
    assert_eq!(
        found,
        vec![
            (LexErrorKind::UnterminatedString, 4, 9),
            (LexErrorKind::InvalidToken, 11, 3),
            (LexErrorKind::UnbalancedDelimiter, 11, 21),
        ]
    );
}

#[test]
fn test_cardinality_mismatch_keeps_document() {
    let source = load_fixture("copa.tourney").replace("equipos: 4", "equipos: 8");
    let parsed = parse(&tokenize(&source).tokens);
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].kind, SyntaxErrorKind::CardinalityMismatch);
    assert_eq!((parsed.errors[0].line(), parsed.errors[0].column()), (3, 12));
    assert_eq!(parsed.document.teams.len(), 4);
}

#[test]
fn test_recovery_reports_each_problem_once() {
    let source = load_fixture("copa.tourney")
        .replace("sede: \"Guatemala\"", "ciudad: \"Guatemala\"")
        .replace("[posicion: \"DEFENSA\", numero: 5", "[altura: 180, numero: 5");
    let parsed = parse(&tokenize(&source).tokens);
    let kinds: Vec<SyntaxErrorKind> = parsed.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![SyntaxErrorKind::UnknownAttribute, SyntaxErrorKind::UnknownAttribute]
    );
    assert_eq!(parsed.document.teams[2].players[0].number, 5);
    assert_eq!(parsed.document.match_count(), 4);
}

#[test]
fn test_analysis_is_deterministic() {
    let source = load_fixture("copa.tourney");
    assert_eq!(
        analyze(&source, ParseOptions::default()),
        analyze(&source, ParseOptions::default())
    );
}
