//! Ordinary Least Squares regression solver.

use crate::core::RegressionResult;
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{center_columns, center_vector, detect_constant_columns};
use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Ordinary Least Squares estimator with an intercept.
///
/// Predictors and response are centered, the slopes come from a column-pivoted QR
/// solve, and the intercept is recovered from the means. Constant or collinear
/// predictors are aliased and their slopes set to NaN.
///
/// # Example
///
/// ```rust
/// use cooks_outliers::solvers::{FittedRegressor, OlsRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(5, 1, |i, _| i as f64);
/// let y = Col::from_fn(5, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = OlsRegressor::default().fit(&x, &y).unwrap();
/// assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    rank_tolerance: f64,
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self {
            rank_tolerance: 1e-10,
        }
    }
}

impl OlsRegressor {
    /// Create a regressor with the given rank tolerance.
    pub fn new(rank_tolerance: f64) -> Self {
        Self { rank_tolerance }
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: n_samples,
                y_len: y.nrows(),
            });
        }

        // Intercept plus one slope per predictor
        let needed = (n_features + 1).max(2);
        if n_samples < needed {
            return Err(RegressionError::InsufficientObservations {
                needed,
                got: n_samples,
            });
        }

        let finite = y.iter().all(|v| v.is_finite())
            && (0..n_samples).all(|i| (0..n_features).all(|j| x[(i, j)].is_finite()));
        if !finite {
            return Err(RegressionError::NonFiniteInput);
        }

        let constant_cols = detect_constant_columns(x, self.rank_tolerance);
        if constant_cols.iter().all(|&c| c) {
            return Err(RegressionError::ConstantPredictor);
        }

        let (x_centered, x_means) = center_columns(x);
        let (y_centered, y_mean) = center_vector(y);

        let (coefficients, aliased, rank) =
            self.solve_with_qr(&x_centered, &y_centered, &constant_cols);

        // Residuals in centered coordinates; the correction absorbs rounding in the means
        let centered_fit = |i: usize| {
            (0..n_features)
                .filter(|&j| !aliased[j])
                .map(|j| x_centered[(i, j)] * coefficients[j])
                .sum::<f64>()
        };
        let correction = (0..n_samples)
            .map(|i| y_centered[i] - centered_fit(i))
            .sum::<f64>()
            / n_samples as f64;
        let residuals = Col::from_fn(n_samples, |i| y_centered[i] - correction - centered_fit(i));
        let fitted_values = Col::from_fn(n_samples, |i| y[i] - residuals[i]);

        // intercept = y_mean - x_means' * coefficients
        let mut intercept = y_mean + correction;
        for j in 0..n_features {
            if !aliased[j] {
                intercept -= x_means[j] * coefficients[j];
            }
        }

        let result = compute_statistics(
            y,
            coefficients,
            intercept,
            residuals,
            fitted_values,
            aliased,
            rank,
        );

        Ok(FittedOls { result })
    }
}

impl OlsRegressor {
    /// Solve the centered least squares problem by column-pivoted QR.
    ///
    /// Returns the slopes in original column order, the aliased mask and the rank.
    fn solve_with_qr(
        &self,
        x: &Mat<f64>,
        y: &Col<f64>,
        constant_cols: &[bool],
    ) -> (Col<f64>, Vec<bool>, usize) {
        let n_features = x.ncols();
        let n_samples = x.nrows();

        let qr = x.col_piv_qr();
        let q = qr.compute_thin_Q();
        let r = qr.R();

        // perm_fwd[k] is the original column sitting at pivot position k
        let perm_fwd = qr.P().arrays().0;
        let mut position = vec![0usize; n_features];
        for (k, &orig) in perm_fwd.iter().enumerate().take(n_features) {
            position[orig] = k;
        }

        let mut rank = 0;
        for i in 0..n_features.min(n_samples) {
            if r[(i, i)].abs() > self.rank_tolerance {
                rank += 1;
            } else {
                break;
            }
        }

        let aliased: Vec<bool> = (0..n_features)
            .map(|j| constant_cols[j] || position[j] >= rank)
            .collect();

        // Back-substitution on R * beta = Q' * y
        let qty = q.transpose() * y;
        let mut beta_reduced = Col::zeros(rank);
        for i in (0..rank).rev() {
            let mut sum = qty[i];
            for j in (i + 1)..rank {
                sum -= r[(i, j)] * beta_reduced[j];
            }
            beta_reduced[i] = sum / r[(i, i)];
        }

        let coefficients = Col::from_fn(n_features, |j| {
            if aliased[j] {
                f64::NAN
            } else {
                beta_reduced[position[j]]
            }
        });

        (coefficients, aliased, rank)
    }
}

/// Sums of squares, R², MSE and the overall F-test.
fn compute_statistics(
    y: &Col<f64>,
    coefficients: Col<f64>,
    intercept: f64,
    residuals: Col<f64>,
    fitted_values: Col<f64>,
    aliased: Vec<bool>,
    rank: usize,
) -> RegressionResult {
    let n = y.nrows();
    let n_params = rank + 1;

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();
    let y_sum_squares: f64 = y.iter().map(|&yi| yi * yi).sum();

    let r_squared = if tss > 0.0 {
        (1.0 - rss / tss).clamp(0.0, 1.0)
    } else if rss < 1e-10 {
        1.0
    } else {
        0.0
    };

    let df_total = (n - 1) as f64;
    let df_resid = n.saturating_sub(n_params) as f64;
    let adj_r_squared = if df_resid > 0.0 && df_total > 0.0 {
        1.0 - (1.0 - r_squared) * df_total / df_resid
    } else {
        f64::NAN
    };

    let mse = if df_resid > 0.0 {
        rss / df_resid
    } else {
        f64::NAN
    };

    let df_model = rank as f64;
    let f_statistic = if df_model > 0.0 && df_resid > 0.0 && mse > 0.0 {
        ((tss - rss) / df_model) / mse
    } else {
        f64::NAN
    };

    let f_pvalue = if f_statistic.is_finite() {
        FisherSnedecor::new(df_model, df_resid)
            .map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
    } else {
        f64::NAN
    };

    RegressionResult {
        coefficients,
        intercept,
        residuals,
        fitted_values,
        rank,
        n_parameters: n_params,
        n_observations: n,
        aliased,
        rss,
        tss,
        y_sum_squares,
        r_squared,
        adj_r_squared,
        mse,
        rmse: mse.sqrt(),
        f_statistic,
        f_pvalue,
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    result: RegressionResult,
}

impl FittedRegressor for FittedOls {
    fn result(&self) -> &RegressionResult {
        &self.result
    }
}
