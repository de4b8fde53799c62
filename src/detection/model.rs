//! Fitting the regression behind the influence statistics.

use faer::Col;
use tracing::{debug, instrument, warn};

use super::{X_COLUMN, Y_COLUMN};
use crate::core::{DetectionOptions, NaHandler, NaInfo, RegressionResult};
use crate::diagnostics::{compute_leverage, cooks_distance, cooks_distance_exact_fit};
use crate::error::{Error, Result};
use crate::solvers::{FittedRegressor, OlsRegressor, Regressor};
use crate::table::Table;

/// Fewest complete rows a fit accepts.
pub const MIN_OBSERVATIONS: usize = 2;

/// Residual sum of squares below this fraction of Σy² is treated as an exact fit.
pub const EXACT_FIT_TOLERANCE: f64 = 1e-24;

/// A simple linear regression of `y` on `x`, tied to the table rows it was fit on.
///
/// Per-observation vectors (residuals, fitted values, leverage) follow the order of
/// [`row_indices`](Self::row_indices), which maps them back to table rows.
#[derive(Debug, Clone)]
pub struct FittedModel {
    result: RegressionResult,
    leverage: Col<f64>,
    na_info: NaInfo,
}

impl FittedModel {
    pub fn intercept(&self) -> f64 {
        self.result.intercept
    }

    pub fn slope(&self) -> f64 {
        self.result.coefficients[0]
    }

    pub fn residuals(&self) -> &Col<f64> {
        &self.result.residuals
    }

    pub fn fitted_values(&self) -> &Col<f64> {
        &self.result.fitted_values
    }

    /// Diagonal of the hat matrix.
    pub fn leverage(&self) -> &Col<f64> {
        &self.leverage
    }

    /// Table rows that took part in the fit, in fit order.
    pub fn row_indices(&self) -> &[usize] {
        &self.na_info.kept_indices
    }

    /// Number of table rows seen when fitting, incomplete ones included.
    pub fn n_table_rows(&self) -> usize {
        self.na_info.n_original
    }

    pub fn n_observations(&self) -> usize {
        self.result.n_observations
    }

    pub fn n_parameters(&self) -> usize {
        self.result.n_parameters
    }

    pub fn mse(&self) -> f64 {
        self.result.mse
    }

    pub fn r_squared(&self) -> f64 {
        self.result.r_squared
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.result.rss
    }

    /// Total sum of squares about the mean of `y`.
    pub fn tss(&self) -> f64 {
        self.result.tss
    }

    /// p-value of the overall F-test, NaN when the fit leaves no residual variance.
    pub fn f_pvalue(&self) -> f64 {
        self.result.f_pvalue
    }

    /// Full fit statistics.
    pub fn result(&self) -> &RegressionResult {
        &self.result
    }

    /// True when the line passes through every observation.
    pub fn is_exact_fit(&self) -> bool {
        self.result.is_exact_fit(EXACT_FIT_TOLERANCE)
    }

    /// Cook's distance for every fitted observation.
    ///
    /// An exact fit has no residual variance to scale by, so it falls back to
    /// [`cooks_distance_exact_fit`].
    pub fn cooks_distance(&self) -> Col<f64> {
        if self.is_exact_fit() {
            cooks_distance_exact_fit(&self.leverage, self.result.n_parameters)
        } else {
            cooks_distance(
                &self.result.residuals,
                &self.leverage,
                self.result.mse,
                self.result.n_parameters,
            )
        }
    }

    /// Cook's distances spread over the table rows seen at fit time, `None` for rows
    /// that were left out.
    pub fn cooks_distance_by_row(&self) -> Vec<Option<f64>> {
        let cooks: Vec<f64> = self.cooks_distance().iter().copied().collect();
        self.na_info.expand(&cooks)
    }
}

/// Fit `y` on `x` with an intercept.
///
/// Rows whose `x` or `y` is missing or non-numeric are dropped (or rejected, under
/// `NaAction::Fail`).
///
/// # Errors
///
/// - `MissingColumn` if `x` or `y` is absent
/// - `MissingValues` if an incomplete row is found under `NaAction::Fail`
/// - `InsufficientData` if fewer than two complete rows remain
/// - `Regression` if `x` is constant
#[instrument(skip_all, fields(rows = table.n_rows()))]
pub fn fit_model(table: &Table, options: &DetectionOptions) -> Result<FittedModel> {
    let x = table.numeric_column(X_COLUMN)?;
    let y = table.numeric_column(Y_COLUMN)?;

    let na = NaHandler::process(&x, &y, options.na_action)?;
    if na.na_info.has_removed() {
        warn!(
            dropped = na.na_info.n_removed(),
            "rows without numeric x and y left out of the fit"
        );
    }

    let n_valid = na.y_clean.nrows();
    if n_valid < MIN_OBSERVATIONS {
        return Err(Error::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: n_valid,
        });
    }

    let fitted = OlsRegressor::new(options.rank_tolerance).fit(&na.x_clean, &na.y_clean)?;
    let leverage = compute_leverage(&na.x_clean);

    let model = FittedModel {
        result: fitted.result().clone(),
        leverage,
        na_info: na.na_info,
    };

    debug!(
        n = model.n_observations(),
        intercept = model.intercept(),
        slope = model.slope(),
        r_squared = model.r_squared(),
        exact_fit = model.is_exact_fit(),
        "regression fitted"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NaAction;
    use crate::table::{Column, Value};

    fn table(x: &[f64], y: &[f64]) -> Table {
        Table::new()
            .with_numeric_column("x", x.iter().copied())
            .and_then(|t| t.with_numeric_column("y", y.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_fit_recovers_line() {
        let t = table(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.1, 4.9, 7.0]);
        let model = fit_model(&t, &DetectionOptions::default()).unwrap();

        // slope = Sxy / Sxx = 9.9 / 5
        assert!((model.slope() - 1.98).abs() < 1e-10);
        assert!((model.intercept() - 1.03).abs() < 1e-10);
        assert_eq!(model.residuals().nrows(), 4);
        assert_eq!(model.leverage().nrows(), 4);
        assert!(!model.is_exact_fit());

        // rss = tss - slope * Sxy
        assert!((model.tss() - 19.62).abs() < 1e-10);
        assert!((model.rss() - 0.018).abs() < 1e-10);
        assert!(model.f_pvalue() < 0.01);
    }

    #[test]
    fn test_drops_non_numeric_rows() {
        let t = Table::from_columns([
            Column::new(
                "x",
                vec![
                    Value::Number(1.0),
                    Value::from("abc"),
                    Value::Number(3.0),
                    Value::Number(4.0),
                ],
            ),
            Column::numeric("y", [1.0, 2.0, 2.0, f64::NAN]),
        ])
        .unwrap();

        let model = fit_model(&t, &DetectionOptions::default()).unwrap();
        assert_eq!(model.row_indices(), &[0, 2]);
        assert_eq!(model.n_table_rows(), 4);

        let by_row = model.cooks_distance_by_row();
        assert_eq!(by_row.len(), 4);
        assert!(by_row[1].is_none() && by_row[3].is_none());
    }

    #[test]
    fn test_fail_policy_rejects_gaps() {
        let t = table(&[1.0, 2.0, 3.0], &[1.0, f64::NAN, 3.0]);
        let options = DetectionOptions::builder()
            .na_action(NaAction::Fail)
            .build()
            .unwrap();

        let result = fit_model(&t, &options);
        assert!(matches!(result, Err(Error::MissingValues { rows: 1 })));
    }

    #[test]
    fn test_insufficient_rows_after_dropping() {
        let t = table(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, f64::NAN]);

        let result = fit_model(&t, &DetectionOptions::default());
        assert!(matches!(
            result,
            Err(Error::InsufficientData { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn test_missing_y_column() {
        let t = Table::new().with_numeric_column("x", [1.0, 2.0]).unwrap();

        let result = fit_model(&t, &DetectionOptions::default());
        assert!(matches!(result, Err(Error::MissingColumn { column }) if column == "y"));
    }

    #[test]
    fn test_two_points_are_an_exact_fit() {
        let t = table(&[1.0, 3.0], &[5.0, 9.0]);
        let model = fit_model(&t, &DetectionOptions::default()).unwrap();

        assert!(model.is_exact_fit());
        let cooks = model.cooks_distance();
        assert_eq!(cooks[0], 0.0);
        assert_eq!(cooks[1], 0.0);
    }
}
