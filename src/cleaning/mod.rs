//! Column-level helpers for inspecting and preparing tables before detection.
//!
//! - **Statistics**: mean, median and standard deviation, missing counts, distinct counts
//! - **Transforms**: numeric coercion, min-max scaling, threshold filtering
//! - **IQR outliers**: the boxplot rule on a single column

mod iqr;
mod stats;
mod transform;

pub use iqr::{iqr_bounds, iqr_outliers, IqrBounds, DEFAULT_IQR_MULTIPLIER};
pub use stats::{column_statistics, missing_values, unique_count, ColumnStatistics};
pub use transform::{filter_by_threshold, normalize_column, to_numeric};
