//! Detection options and configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::na_action::NaAction;

/// Cook's distance cutoff used when the caller does not pick one.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Configuration for the outlier detection pipeline.
///
/// Deserializes with defaults for any missing field, so it can be embedded in a
/// caller's own configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Observations with Cook's distance strictly above this are outliers (default: 0.5).
    pub threshold: f64,
    /// How rows with a missing or non-numeric `x`/`y` are handled (default: `Exclude`).
    pub na_action: NaAction,
    /// Rank tolerance for the QR solve (default: 1e-10).
    pub rank_tolerance: f64,
    /// Where to write the annotated table. `None` keeps the result in memory only.
    pub output_path: Option<PathBuf>,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            na_action: NaAction::default(),
            rank_tolerance: 1e-10,
            output_path: None,
        }
    }
}

/// Errors that can occur when validating detection options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("threshold must be finite, got {0}")]
    InvalidThreshold(f64),
    #[error("rank_tolerance must be positive, got {0}")]
    InvalidRankTolerance(f64),
}

impl DetectionOptions {
    /// Create a new builder for detection options.
    pub fn builder() -> DetectionOptionsBuilder {
        DetectionOptionsBuilder::default()
    }

    /// Default options with a different threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.threshold.is_finite() {
            return Err(OptionsError::InvalidThreshold(self.threshold));
        }
        if !(self.rank_tolerance > 0.0) {
            return Err(OptionsError::InvalidRankTolerance(self.rank_tolerance));
        }
        Ok(())
    }
}

/// Builder for `DetectionOptions`.
#[derive(Debug, Clone, Default)]
pub struct DetectionOptionsBuilder {
    options: DetectionOptions,
}

impl DetectionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Cook's distance threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.options.threshold = threshold;
        self
    }

    /// Set the missing value policy.
    pub fn na_action(mut self, action: NaAction) -> Self {
        self.options.na_action = action;
        self
    }

    /// Set the rank tolerance for the QR solve.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Persist the annotated table to `path`.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = Some(path.into());
        self
    }

    /// Build the options, validating them first.
    pub fn build(self) -> Result<DetectionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> DetectionOptions {
        self.options
    }
}
