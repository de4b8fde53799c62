//! Regression diagnostics: leverage and Cook's distance.
//!
//! - **Leverage**: how far each observation's predictors sit from the bulk of the data
//! - **Influence**: Cook's distance, combining residual size and leverage
//!
//! # Example
//!
//! ```rust,ignore
//! use cooks_outliers::diagnostics::{compute_leverage, cooks_distance};
//!
//! // After fitting a model
//! let leverage = compute_leverage(&x);
//! let cooks = cooks_distance(&residuals, &leverage, mse, n_params);
//! ```

mod influence;
mod leverage;

pub use influence::{cooks_distance, cooks_distance_exact_fit};
pub use leverage::{compute_leverage, high_leverage_cutoff};
