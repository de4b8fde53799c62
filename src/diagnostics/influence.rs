//! Influence measures: Cook's distance.

use faer::Col;

use super::leverage::high_leverage_cutoff;

/// Compute Cook's distance for each observation.
///
/// D_i = (e_i² / (p * MSE)) * (h_ii / (1 - h_ii)²)
///
/// Returns NaN everywhere when the MSE is not a positive finite number.
pub fn cooks_distance(
    residuals: &Col<f64>,
    leverage: &Col<f64>,
    mse: f64,
    n_params: usize,
) -> Col<f64> {
    let n = residuals.nrows();

    if mse <= 0.0 || !mse.is_finite() || n_params == 0 {
        return Col::from_fn(n, |_| f64::NAN);
    }

    Col::from_fn(n, |i| {
        let e_i = residuals[i];
        let h_ii = leverage[i];
        let one_minus_h = (1.0 - h_ii).max(1e-14);

        let d_i = (e_i * e_i / (n_params as f64 * mse)) * (h_ii / (one_minus_h * one_minus_h));

        if d_i.is_finite() {
            d_i.max(0.0)
        } else {
            f64::NAN
        }
    })
}

/// Cook's distance when the model reproduces the response exactly.
///
/// With zero residual variance the ratio e_i² / MSE is 0/0. Replacing each squared
/// residual by its expectation MSE·(1 - h_ii) gives D_i = h_ii / (p (1 - h_ii)). Only
/// high leverage points (h_ii > 2p/n) keep that value; every other observation lies on
/// the line without steering it and scores 0.
pub fn cooks_distance_exact_fit(leverage: &Col<f64>, n_params: usize) -> Col<f64> {
    let n = leverage.nrows();
    if n_params == 0 {
        return Col::from_fn(n, |_| f64::NAN);
    }
    let cutoff = high_leverage_cutoff(n, n_params);

    Col::from_fn(n, |i| {
        let h_ii = leverage[i];
        if h_ii > cutoff {
            let one_minus_h = (1.0 - h_ii).max(1e-14);
            h_ii / (n_params as f64 * one_minus_h)
        } else {
            0.0
        }
    })
}
