//! Lexing and parsing in one call.
//!
//! Parsing only runs on a clean token stream: when the lexer reports any
//! error, the analysis stops there and carries the lexical errors alone.

use tracing::{debug, info_span};

use crate::diagnostic::{LexError, SyntaxError};
use crate::lexer::{tokenize, Token};
use crate::parser::{parse_with, ParseOptions, Parsed};
use crate::types::Tournament;

/// Result of analyzing one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub lex_errors: Vec<LexError>,
    /// `None` when lexing failed and parsing was skipped.
    pub parsed: Option<Parsed>,
}

impl Analysis {
    /// The parsed document, if parsing ran.
    pub fn document(&self) -> Option<&Tournament> {
        self.parsed.as_ref().map(|p| &p.document)
    }

    pub fn syntax_errors(&self) -> &[SyntaxError] {
        self.parsed.as_ref().map_or(&[], |p| p.errors.as_slice())
    }

    /// No lexical or syntax errors at all.
    pub fn is_clean(&self) -> bool {
        self.lex_errors.is_empty() && self.syntax_errors().is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.lex_errors.len() + self.syntax_errors().len()
    }
}

/// Tokenize `source` and, when lexing is clean, parse it.
pub fn analyze(source: &str, options: ParseOptions) -> Analysis {
    let _span = info_span!("analyze", bytes = source.len()).entered();

    let lexed = tokenize(source);
    if !lexed.is_ok() {
        debug!(errors = lexed.errors.len(), "lexing failed; skipping parse");
        return Analysis {
            tokens: lexed.tokens,
            lex_errors: lexed.errors,
            parsed: None,
        };
    }

    let parsed = parse_with(&lexed.tokens, options);
    Analysis {
        tokens: lexed.tokens,
        lex_errors: lexed.errors,
        parsed: Some(parsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{LexErrorKind, SyntaxErrorKind};

    const CLEAN: &str = r#"TORNEO { nombre: "Copa", equipos: 1, sede: "Xela" }
EQUIPOS { equipo: "A" [ jugador: "P" [posicion: PORTERO, numero: 1, edad: 20] ] }
ELIMINACION { final: [ partido: "A" vs "TBD" [resultado: "Pendiente"] ] }"#;

    #[test]
    fn test_clean_source() {
        let analysis = analyze(CLEAN, ParseOptions::default());
        assert!(analysis.is_clean());
        assert_eq!(analysis.error_count(), 0);
        assert_eq!(analysis.document().map(|d| d.name.as_str()), Some("Copa"));
    }

    #[test]
    fn test_lex_errors_gate_parsing() {
        let source = CLEAN.replace("\"A\" [ jugador", "\"A\" [ jugador0");
        let analysis = analyze(&source, ParseOptions::default());
        assert!(analysis.parsed.is_none());
        assert!(analysis.document().is_none());
        assert!(analysis.syntax_errors().is_empty());
        assert_eq!(analysis.lex_errors.len(), 1);
        assert_eq!(analysis.lex_errors[0].kind, LexErrorKind::InvalidToken);
        assert!(!analysis.is_clean());
    }

    #[test]
    fn test_syntax_errors_keep_document() {
        let source = CLEAN.replace("equipos: 1", "equipos: 3");
        let analysis = analyze(&source, ParseOptions::default());
        assert_eq!(analysis.error_count(), 1);
        assert_eq!(
            analysis.syntax_errors()[0].kind,
            SyntaxErrorKind::CardinalityMismatch
        );
        assert_eq!(analysis.document().map(|d| d.teams.len()), Some(1));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let source = CLEAN.replace("sede", "ciudad");
        let first = analyze(&source, ParseOptions::strict());
        let second = analyze(&source, ParseOptions::strict());
        assert_eq!(first, second);
    }
}
