//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{NaError, OptionsError};
use crate::solvers::RegressionError;

/// Errors surfaced by the table provider and the detection pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("required column '{column}' is missing")]
    MissingColumn { column: String },

    #[error("insufficient data: need at least {needed} valid rows, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("cannot summarize an empty table")]
    EmptyTable,

    #[error("{rows} rows have a missing or non-numeric x/y value")]
    MissingValues { rows: usize },

    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),

    #[error("regression failed: {0}")]
    Regression(RegressionError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RegressionError> for Error {
    fn from(err: RegressionError) -> Self {
        match err {
            RegressionError::InsufficientObservations { needed, got } => {
                Error::InsufficientData { needed, got }
            }
            other => Error::Regression(other),
        }
    }
}

impl From<NaError> for Error {
    fn from(err: NaError) -> Self {
        match err {
            NaError::NaValuesPresent { n_na } => Error::MissingValues { rows: n_na },
            NaError::LengthMismatch { x_len, y_len } => Error::LengthMismatch {
                column: "y".to_string(),
                expected: x_len,
                actual: y_len,
            },
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
