//! Core traits for regression estimators.

use crate::core::RegressionResult;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("every predictor is constant, the slope is not identifiable")]
    ConstantPredictor,

    #[error("input contains non-finite values")]
    NonFiniteInput,
}

/// A regression estimator that can be fit to data.
///
/// Fitting consumes nothing and returns a separate fitted model.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model.
    ///
    /// # Arguments
    /// * `x` - Predictors of shape (n_samples, n_features), without an intercept column
    /// * `y` - Response of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model.
pub trait FittedRegressor {
    /// Access the regression results.
    fn result(&self) -> &RegressionResult;

    /// Slopes (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Intercept (convenience method).
    fn intercept(&self) -> f64 {
        self.result().intercept
    }

    /// R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }
}
