//! Tokens command implementation.
//!
//! Lists the token stream and lexical errors of a single file.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::diagnostic::LexError;
use crate::discovery::{Config, OutputFormat};
use crate::error::Result;
use crate::lexer::{tokenize, Token};
use crate::output::{display_path, plural, render_table, Printer};

use super::{output_format, print_json, read_source};

/// List the tokens of a tournament file
#[derive(Args, Debug)]
pub struct TokensArgs {
    /// Tournament file
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// A token as listed by this command.
#[derive(Debug, Serialize)]
struct TokenRow<'a> {
    number: usize,
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
}

impl<'a> TokenRow<'a> {
    fn new(number: usize, token: &'a Token) -> Self {
        Self {
            number,
            kind: token.kind.class(),
            lexeme: &token.lexeme,
            line: token.line(),
            column: token.column(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    tokens: Vec<TokenRow<'a>>,
    errors: &'a [LexError],
}

pub fn run(args: TokensArgs, config: &Config, printer: &Printer) -> Result<()> {
    let source = read_source(&args.file)?;
    let lexed = tokenize(&source);
    let rows: Vec<TokenRow> = lexed
        .tokens
        .iter()
        .enumerate()
        .map(|(i, token)| TokenRow::new(i + 1, token))
        .collect();

    match output_format(args.format, config) {
        OutputFormat::Json => print_json(&Listing {
            tokens: rows,
            errors: &lexed.errors,
        })?,
        OutputFormat::Text => {
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.number.to_string(),
                        r.kind.to_string(),
                        r.lexeme.to_string(),
                        r.line.to_string(),
                        r.column.to_string(),
                    ]
                })
                .collect();
            print!("{}", render_table(&["#", "Kind", "Lexeme", "Line", "Column"], &table));

            if !lexed.errors.is_empty() {
                let errors: Vec<Vec<String>> = lexed
                    .errors
                    .iter()
                    .map(|e| {
                        vec![
                            e.number.to_string(),
                            e.lexeme.clone(),
                            e.kind.to_string(),
                            e.message.clone(),
                            e.line().to_string(),
                            e.column().to_string(),
                        ]
                    })
                    .collect();
                println!();
                print!(
                    "{}",
                    render_table(&["#", "Lexeme", "Kind", "Message", "Line", "Column"], &errors)
                );
            }
        }
    }

    let summary = format!(
        "{} in {}",
        plural(lexed.tokens.len(), "token", "tokens"),
        display_path(&args.file)
    );
    if lexed.errors.is_empty() {
        printer.status("Tokenized", &summary);
    } else {
        printer.warning(
            "Tokenized",
            &format!("{}, {}", summary, plural(lexed.errors.len(), "error", "errors")),
        );
    }
    Ok(())
}
