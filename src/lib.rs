//! Influence-based outlier detection for `(x, y)` tables.
//!
//! This library fits an ordinary least squares line of `y` on `x`, scores every
//! observation with Cook's distance, flags observations above a threshold, and
//! summarizes the result. A small table layer reads and writes CSV, and a set of
//! column helpers covers inspection and preparation of the data.
//!
//! # Example
//!
//! ```rust,no_run
//! use cooks_outliers::prelude::*;
//!
//! let options = DetectionOptions::builder()
//!     .threshold(0.5)
//!     .output_path("output_with_outliers.csv")
//!     .build()?;
//!
//! let annotated = detect_outliers("data.csv", &options)?;
//! let summary = summarize(&annotated)?;
//! println!("{summary}");
//! # Ok::<(), cooks_outliers::Error>(())
//! ```
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod cleaning;
pub mod core;
pub mod detection;
pub mod diagnostics;
pub mod error;
pub mod solvers;
pub mod table;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{DetectionOptions, DetectionOptionsBuilder, NaAction};
    pub use crate::detection::{
        annotate, detect_outliers, fit_and_flag, fit_and_flag_with, fit_model, remove_outliers,
        summarize, FittedModel, Summary,
    };
    pub use crate::error::{Error, Result};
    pub use crate::table::{read_csv, write_csv, Column, Table, Value};
}

pub use crate::detection::{detect_outliers, fit_and_flag, summarize, FittedModel, Summary};
pub use crate::error::{Error, Result};
pub use crate::table::{Table, Value};
