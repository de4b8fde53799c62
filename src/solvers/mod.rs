//! Regression solvers.

mod ols;
mod traits;

pub use ols::{FittedOls, OlsRegressor};
pub use traits::{FittedRegressor, RegressionError, Regressor};
