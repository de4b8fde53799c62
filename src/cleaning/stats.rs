//! Descriptive statistics over table columns.

use std::collections::HashSet;

use serde::Serialize;
use statrs::statistics::Statistics;
use tracing::debug;

use crate::error::{Error, Result};
use crate::table::Table;
use crate::utils::median;

/// Location and spread of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStatistics {
    /// Number of numeric cells the statistics were computed from.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator). NaN for a single value.
    pub std_dev: f64,
}

/// Mean, median and sample standard deviation of a column, skipping gaps and text.
///
/// # Errors
///
/// - `MissingColumn` if the column is absent
/// - `EmptyTable` if the column holds no numbers
pub fn column_statistics(table: &Table, column: &str) -> Result<ColumnStatistics> {
    let values: Vec<f64> = table
        .numeric_column(column)?
        .into_iter()
        .flatten()
        .collect();

    let count = values.len();
    let median = median(&values).ok_or(Error::EmptyTable)?;
    let mean = values.iter().mean();
    let std_dev = values.iter().std_dev();

    let stats = ColumnStatistics {
        count,
        mean,
        median,
        std_dev,
    };
    debug!(column, ?stats, "column statistics");
    Ok(stats)
}

/// Number of gaps per column, in column order.
pub fn missing_values(table: &Table) -> Vec<(String, usize)> {
    table
        .columns()
        .iter()
        .map(|c| {
            let missing = c.values().iter().filter(|v| v.is_missing()).count();
            (c.name().to_string(), missing)
        })
        .collect()
}

/// Number of distinct non-missing cells in a column.
pub fn unique_count(table: &Table, column: &str) -> Result<usize> {
    let distinct: HashSet<String> = table
        .require_column(column)?
        .values()
        .iter()
        .filter(|v| !v.is_missing())
        .map(ToString::to_string)
        .collect();

    Ok(distinct.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Value};

    #[test]
    fn test_column_statistics() {
        let table = Table::new()
            .with_numeric_column("x", [1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();

        let stats = column_statistics(&table, "x").unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert!((stats.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_column_statistics_skips_gaps() {
        let table = Table::from_columns([Column::new(
            "x",
            vec![Value::Number(2.0), Value::Missing, Value::from("bad"), Value::Number(4.0)],
        )])
        .unwrap();

        let stats = column_statistics(&table, "x").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 3.0);
        assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_no_spread() {
        let table = Table::new().with_numeric_column("x", [4.0]).unwrap();

        let stats = column_statistics(&table, "x").unwrap();
        assert_eq!(stats.mean, 4.0);
        assert!(stats.std_dev.is_nan());
    }

    #[test]
    fn test_column_statistics_errors() {
        let table = Table::from_columns([Column::new("x", vec![Value::Missing])]).unwrap();

        assert!(matches!(column_statistics(&table, "x"), Err(Error::EmptyTable)));
        assert!(matches!(
            column_statistics(&table, "nope"),
            Err(Error::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_missing_values() {
        let table = Table::from_columns([
            Column::numeric("x", [1.0, f64::NAN, f64::NAN]),
            Column::numeric("y", [1.0, 2.0, 3.0]),
        ])
        .unwrap();

        assert_eq!(
            missing_values(&table),
            vec![("x".to_string(), 2), ("y".to_string(), 0)]
        );
    }

    #[test]
    fn test_unique_count() {
        let table = Table::new()
            .with_numeric_column("x", [1.0, 2.0, 2.0, f64::NAN, 1.0])
            .unwrap();

        assert_eq!(unique_count(&table, "x").unwrap(), 2);
    }
}
