//! Graphviz DOT export of the knockout bracket.
//!
//! Each match becomes a node (`P1`, `P2`, ... in phase order) grouped in a
//! cluster per phase. Match `i` of a phase points at match `i / 2` of the
//! next phase, which is where its winner plays. Completed matches are
//! filled green.

use crate::types::{Phase, Tournament};

const COMPLETED_FILL: &str = "lightgreen";

/// Render the bracket as a `digraph`.
pub fn to_dot(tournament: &Tournament) -> String {
    let mut out = String::from("digraph Bracket {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [shape=box, style=\"rounded,filled\", fillcolor=white];\n");

    let mut ids: Vec<(Phase, Vec<String>)> = Vec::new();
    let mut next_id = 1;

    for phase in Phase::ALL {
        let matches = tournament.matches(phase);
        if matches.is_empty() {
            continue;
        }

        out.push('\n');
        out.push_str(&format!("  subgraph cluster_{} {{\n", phase.key()));
        out.push_str(&format!("    label=\"{}\";\n", phase.label()));

        let mut phase_ids = Vec::with_capacity(matches.len());
        for m in matches {
            let id = format!("P{}", next_id);
            next_id += 1;

            let label = format!(
                "{}\\n{}\\n{}",
                escape(&m.team_a),
                escape(&m.score),
                escape(&m.team_b)
            );
            let fill = if m.is_completed() {
                format!(", fillcolor={}", COMPLETED_FILL)
            } else {
                String::new()
            };
            out.push_str(&format!("    {} [label=\"{}\"{}];\n", id, label, fill));
            phase_ids.push(id);
        }
        out.push_str("  }\n");
        ids.push((phase, phase_ids));
    }

    let mut edges = Vec::new();
    for (phase, from) in &ids {
        let Some(next) = phase.next() else {
            continue;
        };
        let Some((_, to)) = ids.iter().find(|(p, _)| *p == next) else {
            continue;
        };
        for (i, source) in from.iter().enumerate() {
            if let Some(target) = to.get(i / 2) {
                edges.push(format!("  {} -> {};\n", source, target));
            }
        }
    }
    if !edges.is_empty() {
        out.push('\n');
        for edge in edges {
            out.push_str(&edge);
        }
    }

    out.push_str("}\n");
    out
}

/// Escape text for a double-quoted DOT string.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
