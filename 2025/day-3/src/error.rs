use miette::{Diagnostic, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum JoltageError {
    #[error("Could not read battery banks from {}", .path.display())]
    #[diagnostic(
        code(day3::input_unavailable),
        help("Pass the path to your puzzle input, e.g. `input/input.txt`")
    )]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Cannot turn on {requested} batteries in a bank of {available}")]
    #[diagnostic(
        code(day3::invalid_selection),
        help("The battery count must be between 1 and the length of every bank")
    )]
    InvalidSelection { requested: usize, available: usize },

    #[error("Joltage of {digits} digits does not fit in 64 bits")]
    #[diagnostic(code(day3::joltage_overflow))]
    JoltageOverflow { digits: usize },

    #[error("Total joltage of {banks} banks does not fit in 64 bits")]
    #[diagnostic(code(day3::total_overflow))]
    TotalOverflow { banks: usize },
}

/// A malformed battery bank, labelled in the original input.
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse battery bank on line {line}: {reason}")]
#[diagnostic(
    code(day3::parse_error),
    help("Every line must be a non-empty run of digits 0-9")
)]
pub struct ParseError {
    #[source_code]
    pub src: String,
    #[label("here")]
    pub span: SourceSpan,
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(
        src: &str,
        span: (usize, usize),
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            src: src.to_string(),
            span: span.into(),
            line,
            reason: reason.into(),
        }
    }
}
