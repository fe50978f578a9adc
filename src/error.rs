use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Invalid period format: {0:?} (expected MM.YYYY)")]
    InvalidPeriod(String),

    #[error("Report not found for period {0}")]
    ReportNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported file length {}: expected at least {expected} header rows, found {found}", .path.display())]
    StatementTooShort {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
