use super::stats::Stats;
use crate::domain::errors::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Regression measures for one model on one evaluation set.
///
/// Field names are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
    pub mae: f64,
    pub mad: f64,
}

impl RegressionMetrics {
    pub const FIELDS: [&'static str; 5] = ["mse", "rmse", "r2", "mae", "mad"];

    /// Calculate all regression measures from predictions and ground truth.
    ///
    /// NaN inputs propagate into every affected measure.
    pub fn calculate(y_pred: &[f64], y_true: &[f64]) -> Result<Self> {
        Stats::ensure_len("y_hat", y_true.len(), y_pred.len())?;

        let mse = mse(y_pred, y_true);
        let metrics = Self {
            mse,
            rmse: mse.sqrt(),
            r2: r2(y_pred, y_true),
            mae: mae(y_pred, y_true),
            mad: mad(y_pred, y_true),
        };

        if metrics.r2.is_nan() && !y_true.is_empty() {
            warn!("R2 is undefined: ground truth has zero variance");
        }
        debug!(?metrics, n = y_true.len(), "regression metrics computed");
        Ok(metrics)
    }

    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("mse", self.mse),
            ("rmse", self.rmse),
            ("r2", self.r2),
            ("mae", self.mae),
            ("mad", self.mad),
        ]
    }
}

fn abs_errors(y_pred: &[f64], y_true: &[f64]) -> Vec<f64> {
    y_pred
        .iter()
        .zip(y_true)
        .map(|(p, t)| (p - t).abs())
        .collect()
}

/// Mean squared error.
pub fn mse(y_pred: &[f64], y_true: &[f64]) -> f64 {
    let squared: Vec<f64> = y_pred
        .iter()
        .zip(y_true)
        .map(|(p, t)| (p - t).powi(2))
        .collect();
    Stats::mean(&squared)
}

/// Root mean squared error.
pub fn rmse(y_pred: &[f64], y_true: &[f64]) -> f64 {
    mse(y_pred, y_true).sqrt()
}

/// Coefficient of determination, NaN when `y_true` is constant.
pub fn r2(y_pred: &[f64], y_true: &[f64]) -> f64 {
    let mean_true = Stats::mean(y_true);
    let residual_ss: f64 = y_pred
        .iter()
        .zip(y_true)
        .map(|(p, t)| (t - p).powi(2))
        .sum();
    let total_ss: f64 = y_true.iter().map(|t| (t - mean_true).powi(2)).sum();

    1.0 - Stats::ratio(residual_ss, total_ss)
}

/// Mean absolute error.
pub fn mae(y_pred: &[f64], y_true: &[f64]) -> f64 {
    Stats::mean(&abs_errors(y_pred, y_true))
}

/// Median absolute error.
pub fn mad(y_pred: &[f64], y_true: &[f64]) -> f64 {
    Stats::median(&abs_errors(y_pred, y_true))
}
