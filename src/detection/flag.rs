//! Writing influence results back onto tables.

use std::path::Path;

use tracing::{info, instrument};

use super::model::{fit_model, FittedModel};
use super::{COOKS_DISTANCE_COLUMN, OUTLIER_COLUMN};
use crate::core::DetectionOptions;
use crate::error::{Error, Result};
use crate::table::{read_csv, write_csv, Column, Table, Value};

/// Append `cooks_distance` and `outlier` columns computed from `model`.
///
/// Rows are matched by position. Rows the model did not use, including rows added
/// after fitting, get a gap and `outlier = false`. Existing columns with these names
/// are replaced in place.
pub fn annotate(table: &mut Table, model: &FittedModel, threshold: f64) -> Result<()> {
    let n_rows = table.n_rows();
    if n_rows < model.n_table_rows() {
        return Err(Error::LengthMismatch {
            column: COOKS_DISTANCE_COLUMN.to_string(),
            expected: model.n_table_rows(),
            actual: n_rows,
        });
    }

    let by_row = model.cooks_distance_by_row();
    let cooks: Vec<Option<f64>> = (0..n_rows)
        .map(|i| by_row.get(i).copied().flatten())
        .collect();
    let flags = cooks.iter().map(|d| d.is_some_and(|d| d > threshold));

    table.set_column(Column::new(
        COOKS_DISTANCE_COLUMN,
        cooks.iter().map(|&d| Value::from(d)).collect(),
    ))?;
    table.set_column(Column::boolean(OUTLIER_COLUMN, flags))?;
    Ok(())
}

/// Fit the regression and flag rows whose Cook's distance exceeds `threshold`.
///
/// Returns the input table with `cooks_distance` and `outlier` appended.
pub fn fit_and_flag(table: Table, threshold: f64) -> Result<Table> {
    fit_and_flag_with(table, &DetectionOptions::with_threshold(threshold))
}

/// [`fit_and_flag`] with full control over the options. `output_path` is ignored here.
#[instrument(skip_all, fields(threshold = options.threshold))]
pub fn fit_and_flag_with(mut table: Table, options: &DetectionOptions) -> Result<Table> {
    options.validate()?;

    let model = fit_model(&table, options)?;
    annotate(&mut table, &model, options.threshold)?;
    Ok(table)
}

/// Read a CSV file, flag outliers and, when `options.output_path` is set, write the
/// annotated table there.
///
/// # Errors
///
/// `NotFound` if `path` does not exist, plus everything [`fit_and_flag_with`] returns.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn detect_outliers(path: impl AsRef<Path>, options: &DetectionOptions) -> Result<Table> {
    options.validate()?;

    let table = read_csv(path.as_ref())?;
    let annotated = fit_and_flag_with(table, options)?;

    if let Some(output) = &options.output_path {
        write_csv(&annotated, output)?;
        info!(output = %output.display(), "results saved");
    }
    Ok(annotated)
}

/// Rows not flagged as outliers.
///
/// Fails with `MissingColumn` if the table has no `outlier` column.
pub fn remove_outliers(table: &Table) -> Result<Table> {
    let keep: Vec<bool> = table
        .require_column(OUTLIER_COLUMN)?
        .values()
        .iter()
        .map(|v| v.as_bool() != Some(true))
        .collect();

    table.filter_rows(&keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlier_table() -> Table {
        Table::new()
            .with_numeric_column("x", [1.0, 2.0, 3.0, 4.0, 5.0, 100.0])
            .and_then(|t| t.with_numeric_column("y", [2.0, 4.0, 6.0, 8.0, 10.0, 200.0]))
            .unwrap()
    }

    #[test]
    fn test_rows_added_after_fitting_are_not_covered() {
        let mut table = outlier_table();
        let model = fit_model(&table, &DetectionOptions::default()).unwrap();

        let mut x: Vec<f64> = table.numeric_column("x").unwrap().into_iter().flatten().collect();
        let mut y: Vec<f64> = table.numeric_column("y").unwrap().into_iter().flatten().collect();
        x.push(0.5);
        y.push(0.5);
        table = Table::new()
            .with_numeric_column("x", x)
            .and_then(|t| t.with_numeric_column("y", y))
            .unwrap();

        annotate(&mut table, &model, 0.5).unwrap();

        let cooks = table.column(COOKS_DISTANCE_COLUMN).unwrap();
        let outlier = table.column(OUTLIER_COLUMN).unwrap();
        assert!(cooks.values()[6].is_missing());
        assert_eq!(outlier.values()[6], Value::Bool(false));
    }

    #[test]
    fn test_annotate_rejects_shorter_table() {
        let table = outlier_table();
        let model = fit_model(&table, &DetectionOptions::default()).unwrap();

        let mut short = table.head(3);
        let result = annotate(&mut short, &model, 0.5);
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_reflagging_replaces_columns() {
        let flagged = fit_and_flag(outlier_table(), 0.5).unwrap();
        let reflagged = fit_and_flag(flagged, 1e9).unwrap();

        assert_eq!(
            reflagged.column_names(),
            vec!["x", "y", COOKS_DISTANCE_COLUMN, OUTLIER_COLUMN]
        );
        let any_flagged = reflagged
            .column(OUTLIER_COLUMN)
            .unwrap()
            .values()
            .iter()
            .any(|v| v.as_bool() == Some(true));
        assert!(!any_flagged);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let result = fit_and_flag(outlier_table(), -1.0);
        assert!(matches!(result, Err(Error::Options(_))));
    }

    #[test]
    fn test_remove_outliers() {
        let flagged = fit_and_flag(outlier_table(), 0.5).unwrap();
        let kept = remove_outliers(&flagged).unwrap();

        assert_eq!(kept.n_rows(), 5);
        assert!(remove_outliers(&outlier_table()).is_err());
    }
}
