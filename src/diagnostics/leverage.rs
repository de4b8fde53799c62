//! Leverage (hat matrix diagonal) calculations.

use faer::{Col, Mat};

use crate::utils::center_columns;

/// Compute leverage values, the diagonal of H = X(X'X)^(-1)X', for a model with intercept.
///
/// `x` holds the predictors only. The intercept contributes 1/n to every row and the
/// centered predictors contribute the squared row norms of the thin Q from a
/// column-pivoted QR, so the result does not depend on the location or scale of `x`.
///
/// # Properties
/// - h_ii ∈ [1/n, 1]
/// - Σ h_ii = p (number of parameters, intercept included)
/// - Points with h_ii > 2p/n are considered high leverage
pub fn compute_leverage(x: &Mat<f64>) -> Col<f64> {
    let n = x.nrows();
    if n == 0 {
        return Col::zeros(0);
    }
    let base = 1.0 / n as f64;

    let (x_centered, _) = center_columns(x);
    let k = x_centered.ncols().min(n);
    if k == 0 {
        return Col::from_fn(n, |_| base);
    }

    let qr = x_centered.col_piv_qr();
    let q = qr.compute_thin_Q();
    let r = qr.R();

    // Pivots are ordered by magnitude; drop those negligible relative to the largest
    let largest = r[(0, 0)].abs();
    let cutoff = largest * f64::EPSILON * n as f64;
    let rank = if largest > 0.0 {
        (0..k).take_while(|&i| r[(i, i)].abs() > cutoff).count()
    } else {
        0
    };

    Col::from_fn(n, |i| {
        let spread: f64 = (0..rank).map(|j| q[(i, j)] * q[(i, j)]).sum();
        (base + spread).clamp(0.0, 1.0)
    })
}

/// The conventional 2p/n high leverage cutoff.
pub fn high_leverage_cutoff(n_observations: usize, n_params: usize) -> f64 {
    2.0 * n_params as f64 / n_observations as f64
}
