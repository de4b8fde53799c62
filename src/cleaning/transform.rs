//! In-place column transforms and row filters.

use tracing::debug;

use crate::error::{Error, Result};
use crate::table::{Table, Value};

fn column_mut<'a>(table: &'a mut Table, column: &str) -> Result<&'a mut [Value]> {
    table
        .column_mut(column)
        .map(|c| c.values_mut())
        .ok_or_else(|| Error::MissingColumn {
            column: column.to_string(),
        })
}

/// Coerce every cell of a column to a number; anything unparsable becomes a gap.
///
/// Returns how many cells were turned into gaps.
pub fn to_numeric(table: &mut Table, column: &str) -> Result<usize> {
    let mut coerced = 0;
    for value in column_mut(table, column)? {
        let number = value.as_f64();
        if number.is_none() && !value.is_missing() {
            coerced += 1;
        }
        *value = Value::from(number);
    }

    debug!(column, coerced, "column converted to numeric");
    Ok(coerced)
}

/// Min-max scale a column to [0, 1] in place.
///
/// Non-numeric cells become gaps. A column with a single distinct value scales to 0.
pub fn normalize_column(table: &mut Table, column: &str) -> Result<()> {
    let values = column_mut(table, column)?;

    let numbers = values.iter().filter_map(Value::as_f64);
    let (min, max) = numbers.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let range = max - min;

    for value in values.iter_mut() {
        *value = Value::from(value.as_f64().map(|v| {
            if range > 0.0 {
                (v - min) / range
            } else {
                0.0
            }
        }));
    }

    debug!(column, min, max, "column normalized");
    Ok(())
}

/// Rows whose value in `column` is at least `threshold`. Gaps never pass.
pub fn filter_by_threshold(table: &Table, column: &str, threshold: f64) -> Result<Table> {
    let keep: Vec<bool> = table
        .numeric_column(column)?
        .iter()
        .map(|v| v.is_some_and(|v| v >= threshold))
        .collect();

    let filtered = table.filter_rows(&keep)?;
    debug!(
        column,
        threshold,
        removed = table.n_rows() - filtered.n_rows(),
        "rows filtered"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn test_to_numeric() {
        let mut table = Table::from_columns([Column::new(
            "x",
            vec![Value::from("1.5"), Value::from("abc"), Value::Missing, Value::Number(2.0)],
        )])
        .unwrap();

        let coerced = to_numeric(&mut table, "x").unwrap();

        assert_eq!(coerced, 1);
        assert_eq!(
            table.column("x").unwrap().values(),
            &[Value::Number(1.5), Value::Missing, Value::Missing, Value::Number(2.0)]
        );
    }

    #[test]
    fn test_normalize_column() {
        let mut table = Table::new()
            .with_numeric_column("x", [1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();

        normalize_column(&mut table, "x").unwrap();

        assert_eq!(
            table.numeric_column("x").unwrap(),
            vec![Some(0.0), Some(0.25), Some(0.5), Some(0.75), Some(1.0)]
        );
    }

    #[test]
    fn test_normalize_constant_column() {
        let mut table = Table::new()
            .with_numeric_column("x", [3.0, 3.0, f64::NAN])
            .unwrap();

        normalize_column(&mut table, "x").unwrap();

        assert_eq!(
            table.numeric_column("x").unwrap(),
            vec![Some(0.0), Some(0.0), None]
        );
    }

    #[test]
    fn test_filter_by_threshold() {
        let table = Table::new()
            .with_numeric_column("x", [1.0, 5.0, f64::NAN, 3.0])
            .and_then(|t| t.with_numeric_column("y", [10.0, 50.0, 0.0, 30.0]))
            .unwrap();

        let filtered = filter_by_threshold(&table, "x", 3.0).unwrap();

        assert_eq!(
            filtered.numeric_column("y").unwrap(),
            vec![Some(50.0), Some(30.0)]
        );
    }

    #[test]
    fn test_missing_column() {
        let mut table = Table::new().with_numeric_column("x", [1.0]).unwrap();

        assert!(matches!(
            normalize_column(&mut table, "z"),
            Err(Error::MissingColumn { .. })
        ));
    }
}
