// File: crates/plot-cli/src/error.rs
// Summary: Typed error kinds for request resolution, tagged for caller-side diagnostics.

use thiserror::Error;

/// Every failure a plot request can hit before or during rendering. The
/// display form leads with the error kind so callers can match diagnostics
/// on stderr.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("MissingArgument: --{0} is required for this plot type")]
    MissingArgument(&'static str),

    #[error("MissingColumns: {0}")]
    MissingColumns(String),

    #[error("MalformedInput: {0}")]
    MalformedInput(String),

    #[error("IOFailure: {0}")]
    Io(#[from] std::io::Error),

    #[error("IOFailure: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
