//! Missing value handling for the `x`/`y` pairs fed to the regression.
//!
//! A row participates in the fit only when both its predictor and response are
//! present and finite. Two policies are supported:
//! - `Exclude`: drop incomplete rows but remember where they were, so per-row
//!   outputs can be written back against the original row order
//! - `Fail`: return an error if any row is incomplete
//!
//! # Example
//!
//! ```
//! use cooks_outliers::core::{NaAction, NaHandler};
//!
//! let x = [Some(1.0), Some(2.0), None, Some(4.0)];
//! let y = [Some(2.0), Some(f64::NAN), Some(6.0), Some(8.0)];
//!
//! let result = NaHandler::process(&x, &y, NaAction::Exclude).unwrap();
//! assert_eq!(result.na_info.kept_indices, vec![0, 3]);
//! ```

use faer::{Col, Mat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Action to take when an observation is missing or non-numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaAction {
    /// Drop incomplete rows and keep track of their positions.
    #[default]
    Exclude,

    /// Reject the input if any row is incomplete.
    Fail,
}

/// Errors raised while screening observations.
#[derive(Debug, Error)]
pub enum NaError {
    /// Incomplete rows found with `NaAction::Fail`.
    #[error("{n_na} rows have a missing or non-numeric x/y value")]
    NaValuesPresent { n_na: usize },

    /// `x` and `y` have different lengths.
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
}

/// Where the complete rows came from.
#[derive(Debug, Clone)]
pub struct NaInfo {
    /// Number of rows before screening.
    pub n_original: usize,

    /// Mask of incomplete rows (true = dropped).
    pub na_mask: Vec<bool>,

    /// Original positions of the rows that were kept, in order.
    pub kept_indices: Vec<usize>,

    /// The policy that was applied.
    pub action: NaAction,
}

impl NaInfo {
    /// Number of rows dropped.
    pub fn n_removed(&self) -> usize {
        self.n_original - self.kept_indices.len()
    }

    /// Check if any rows were dropped.
    pub fn has_removed(&self) -> bool {
        self.n_removed() > 0
    }

    /// Spread values computed on the kept rows back to the original length,
    /// with `None` at dropped positions.
    pub fn expand(&self, clean_values: &[f64]) -> Vec<Option<f64>> {
        let mut expanded = vec![None; self.n_original];
        for (&orig, &value) in self.kept_indices.iter().zip(clean_values) {
            expanded[orig] = Some(value);
        }
        expanded
    }
}

/// Complete observations ready for fitting.
#[derive(Debug, Clone)]
pub struct NaResult {
    /// Predictor as an n × 1 design matrix (no intercept column).
    pub x_clean: Mat<f64>,

    /// Response vector.
    pub y_clean: Col<f64>,

    /// Information about the rows that were dropped.
    pub na_info: NaInfo,
}

/// Handler for missing value processing.
pub struct NaHandler;

impl NaHandler {
    /// Screen paired observations according to `action`.
    ///
    /// # Errors
    ///
    /// - `NaError::LengthMismatch` if `x` and `y` differ in length
    /// - `NaError::NaValuesPresent` if `action` is `Fail` and any row is incomplete
    pub fn process(
        x: &[Option<f64>],
        y: &[Option<f64>],
        action: NaAction,
    ) -> Result<NaResult, NaError> {
        if x.len() != y.len() {
            return Err(NaError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let na_mask = Self::find_na_rows(x, y);
        let n_na = na_mask.iter().filter(|&&v| v).count();

        if action == NaAction::Fail && n_na > 0 {
            return Err(NaError::NaValuesPresent { n_na });
        }

        let kept_indices: Vec<usize> = na_mask
            .iter()
            .enumerate()
            .filter_map(|(i, &had_na)| if had_na { None } else { Some(i) })
            .collect();

        let n_clean = kept_indices.len();
        let x_clean = Mat::from_fn(n_clean, 1, |i, _| x[kept_indices[i]].unwrap_or(f64::NAN));
        let y_clean = Col::from_fn(n_clean, |i| y[kept_indices[i]].unwrap_or(f64::NAN));

        Ok(NaResult {
            x_clean,
            y_clean,
            na_info: NaInfo {
                n_original: x.len(),
                na_mask,
                kept_indices,
                action,
            },
        })
    }

    fn find_na_rows(x: &[Option<f64>], y: &[Option<f64>]) -> Vec<bool> {
        let usable = |v: &Option<f64>| v.is_some_and(f64::is_finite);

        x.iter()
            .zip(y)
            .map(|(xi, yi)| !(usable(xi) && usable(yi)))
            .collect()
    }
}
