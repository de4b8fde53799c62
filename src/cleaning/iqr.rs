//! Interquartile range (boxplot) outliers on a single column.

use tracing::debug;

use crate::error::Result;
use crate::table::Table;
use crate::utils::quantile;

/// Fence width in IQRs used by the classic boxplot rule.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Quartiles and the fences derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// True when `value` falls outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Fences at `Q1 - k·IQR` and `Q3 + k·IQR`. `None` for an empty sample.
pub fn iqr_bounds(values: &[f64], multiplier: f64) -> Option<IqrBounds> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;

    Some(IqrBounds {
        q1,
        q3,
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    })
}

/// Rows whose value in `column` lies outside the IQR fences.
///
/// Gaps and text are ignored when computing quartiles and are never returned.
pub fn iqr_outliers(table: &Table, column: &str, multiplier: f64) -> Result<Table> {
    let values = table.numeric_column(column)?;
    let present: Vec<f64> = values.iter().flatten().copied().collect();

    let indices: Vec<usize> = match iqr_bounds(&present, multiplier) {
        Some(bounds) => values
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.filter(|&v| bounds.is_outlier(v)).map(|_| i))
            .collect(),
        None => Vec::new(),
    };

    debug!(column, outliers = indices.len(), "IQR outliers detected");
    Ok(table.take_rows(&indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let bounds = iqr_bounds(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();

        assert!((bounds.q1 - 2.25).abs() < 1e-12);
        assert!((bounds.q3 - 4.75).abs() < 1e-12);
        assert!((bounds.iqr() - 2.5).abs() < 1e-12);
        assert!((bounds.upper - 8.5).abs() < 1e-12);
        assert!(bounds.is_outlier(100.0));
        assert!(!bounds.is_outlier(5.0));
    }

    #[test]
    fn test_iqr_outliers_returns_rows() {
        let table = Table::new()
            .with_numeric_column("x", [1.0, 2.0, 3.0, 4.0, 5.0, 100.0])
            .and_then(|t| t.with_numeric_column("y", [2.0, 4.0, 6.0, 8.0, 10.0, 200.0]))
            .unwrap();

        let outliers = iqr_outliers(&table, "y", DEFAULT_IQR_MULTIPLIER).unwrap();

        assert_eq!(outliers.n_rows(), 1);
        assert_eq!(outliers.numeric_column("x").unwrap(), vec![Some(100.0)]);
    }

    #[test]
    fn test_iqr_outliers_empty_column() {
        let table = Table::new().with_numeric_column("x", [f64::NAN]).unwrap();

        let outliers = iqr_outliers(&table, "x", DEFAULT_IQR_MULTIPLIER).unwrap();
        assert_eq!(outliers.n_rows(), 0);
    }
}
