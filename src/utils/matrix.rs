//! Matrix utility functions.

use faer::{Col, Mat};

/// Flag design columns whose spread is below `tolerance`.
///
/// An empty matrix reports every column as constant.
pub fn detect_constant_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    let n_rows = x.nrows();

    (0..x.ncols())
        .map(|j| {
            if n_rows == 0 {
                return true;
            }
            let first = x[(0, j)];
            (1..n_rows).all(|i| (x[(i, j)] - first).abs() < tolerance)
        })
        .collect()
}

/// Subtract each column's mean, returning the centered matrix and the means.
pub fn center_columns(x: &Mat<f64>) -> (Mat<f64>, Col<f64>) {
    let n_rows = x.nrows();
    let means = Col::from_fn(x.ncols(), |j| {
        (0..n_rows).map(|i| x[(i, j)]).sum::<f64>() / n_rows as f64
    });
    let centered = Mat::from_fn(n_rows, x.ncols(), |i, j| x[(i, j)] - means[j]);

    (centered, means)
}

/// Subtract the mean from a vector, returning the centered vector and the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let n = y.nrows();
    let mean = y.iter().sum::<f64>() / n as f64;

    (Col::from_fn(n, |i| y[i] - mean), mean)
}
