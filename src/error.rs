use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tourney operations
#[derive(Error, Diagnostic, Debug)]
pub enum TourneyError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tourney::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tourney::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(tourney::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Analysis failed: {message}")]
    #[diagnostic(code(tourney::analysis))]
    Analysis {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TourneyError>;
