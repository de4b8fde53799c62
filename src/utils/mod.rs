//! Small numeric helpers shared by the solver and the cleaning utilities.

mod matrix;
mod quantile;

pub use matrix::{center_columns, center_vector, detect_constant_columns};
pub use quantile::{median, quantile};
