//! Core types shared by the solver and the detection pipeline.

mod na_action;
mod options;
mod result;

pub use na_action::{NaAction, NaError, NaHandler, NaInfo, NaResult};
pub use options::{DetectionOptions, DetectionOptionsBuilder, OptionsError, DEFAULT_THRESHOLD};
pub use result::RegressionResult;
