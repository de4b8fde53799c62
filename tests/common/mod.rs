//! Common test utilities and data generators.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use cooks_outliers::table::Table;
use faer::{Col, Mat};

/// The six-point series whose last observation sits far out on x.
pub const OUTLIER_X: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
pub const OUTLIER_Y: [f64; 6] = [2.0, 4.0, 6.0, 8.0, 10.0, 200.0];

/// Generate y = intercept + slope * x + noise with x spread over [0, 10).
pub fn generate_linear_data(
    n_samples: usize,
    intercept: f64,
    slope: f64,
    noise_std: f64,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let mut next_rand = || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let xi = 10.0 * i as f64 / n_samples as f64;
        x.push(xi);
        y.push(intercept + slope * xi + noise_std * next_rand());
    }
    (x, y)
}

/// Build an `x`/`y` table.
pub fn xy_table(x: &[f64], y: &[f64]) -> Table {
    Table::new()
        .with_numeric_column("x", x.iter().copied())
        .and_then(|t| t.with_numeric_column("y", y.iter().copied()))
        .expect("x and y have equal length")
}

/// faer views of the same data.
pub fn xy_matrices(x: &[f64], y: &[f64]) -> (Mat<f64>, Col<f64>) {
    (
        Mat::from_fn(x.len(), 1, |i, _| x[i]),
        Col::from_fn(y.len(), |i| y[i]),
    )
}

/// Write raw CSV text to `name` inside `dir`.
pub fn write_csv_text(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create test csv");
    file.write_all(text.as_bytes()).expect("write test csv");
    path
}

/// Render x/y pairs as CSV text with a header.
pub fn xy_csv(x: &[f64], y: &[f64]) -> String {
    let mut text = String::from("x,y\n");
    for (xi, yi) in x.iter().zip(y) {
        text.push_str(&format!("{},{}\n", xi, yi));
    }
    text
}
