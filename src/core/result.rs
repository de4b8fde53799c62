//! Regression result structures.

use faer::Col;

/// Result of an ordinary least squares fit with intercept.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Estimated slopes, one per predictor column. Aliased predictors are NaN.
    pub coefficients: Col<f64>,

    /// Intercept term.
    pub intercept: f64,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values on the training data.
    pub fitted_values: Col<f64>,

    // ========== Rank Information ==========
    /// Numerical rank of the centered design.
    pub rank: usize,

    /// Number of parameters, intercept included.
    pub n_parameters: usize,

    /// Number of observations used in the fit.
    pub n_observations: usize,

    /// Which predictors are aliased (constant or collinear).
    pub aliased: Vec<bool>,

    // ========== Fit Statistics ==========
    /// Residual sum of squares.
    pub rss: f64,

    /// Total sum of squares around the mean response.
    pub tss: f64,

    /// Uncentered sum of squared responses, the scale rounding noise is measured against.
    pub y_sum_squares: f64,

    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    /// Mean squared error, RSS / (n - p). NaN when there are no residual degrees of freedom.
    pub mse: f64,

    /// Root mean squared error.
    pub rmse: f64,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// P-value for the F-statistic.
    pub f_pvalue: f64,
}

impl RegressionResult {
    /// Residual degrees of freedom (n - p).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// True when the residuals are rounding noise relative to the magnitude of `y`.
    ///
    /// Constant `y` counts as an exact fit too.
    pub fn is_exact_fit(&self, relative_tolerance: f64) -> bool {
        self.rss <= relative_tolerance * self.y_sum_squares
    }
}
