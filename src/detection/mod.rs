//! Cook's distance outlier detection for `(x, y)` tables.
//!
//! The pipeline fits `y = intercept + slope * x` by ordinary least squares,
//! computes each observation's Cook's distance from its residual and leverage,
//! and writes two columns back onto the table:
//!
//! - `cooks_distance`: the influence statistic, a gap for rows left out of the fit
//! - `outlier`: `cooks_distance > threshold`
//!
//! # Example
//!
//! ```rust
//! use cooks_outliers::detection::{fit_and_flag, summarize};
//! use cooks_outliers::table::Table;
//!
//! let table = Table::new()
//!     .with_numeric_column("x", [1.0, 2.0, 3.0, 4.0, 5.0, 100.0])?
//!     .with_numeric_column("y", [2.0, 4.0, 6.0, 8.0, 10.0, 200.0])?;
//!
//! let annotated = fit_and_flag(table, 0.5)?;
//! let summary = summarize(&annotated)?;
//! assert_eq!(summary.outliers, 1);
//! # Ok::<(), cooks_outliers::Error>(())
//! ```

mod flag;
mod model;
mod summary;

pub use flag::{annotate, detect_outliers, fit_and_flag, fit_and_flag_with, remove_outliers};
pub use model::{fit_model, FittedModel, EXACT_FIT_TOLERANCE, MIN_OBSERVATIONS};
pub use summary::{summarize, Summary};

/// Predictor column name.
pub const X_COLUMN: &str = "x";
/// Response column name.
pub const Y_COLUMN: &str = "y";
/// Column holding each row's Cook's distance.
pub const COOKS_DISTANCE_COLUMN: &str = "cooks_distance";
/// Column holding each row's outlier flag.
pub const OUTLIER_COLUMN: &str = "outlier";
