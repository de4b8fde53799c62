//! Outlier counts over an annotated table.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::OUTLIER_COLUMN;
use crate::error::{Error, Result};
use crate::table::Table;

/// Outlier counts for an annotated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_points: usize,
    pub outliers: usize,
    pub non_outliers: usize,
    /// outliers / total_points × 100
    pub outlier_percentage: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total points: {}", self.total_points)?;
        writeln!(f, "Outliers: {}", self.outliers)?;
        writeln!(f, "Non outliers: {}", self.non_outliers)?;
        write!(f, "Outlier percentage: {:.2}%", self.outlier_percentage)
    }
}

/// Count flagged rows.
///
/// Every row counts toward the total, including rows the fit did not cover.
///
/// # Errors
///
/// - `EmptyTable` if the table has no rows
/// - `MissingColumn` if the table has no `outlier` column
pub fn summarize(table: &Table) -> Result<Summary> {
    let total_points = table.n_rows();
    if total_points == 0 {
        return Err(Error::EmptyTable);
    }

    let outliers = table
        .require_column(OUTLIER_COLUMN)?
        .values()
        .iter()
        .filter(|v| v.as_bool() == Some(true))
        .count();

    let summary = Summary {
        total_points,
        outliers,
        non_outliers: total_points - outliers,
        outlier_percentage: outliers as f64 / total_points as f64 * 100.0,
    };
    debug!(?summary, "summary computed");
    Ok(summary)
}
