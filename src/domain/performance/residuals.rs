use super::stats::Stats;
use crate::domain::errors::Result;
use serde::{Deserialize, Serialize};

/// One observation of the evaluation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualRow {
    pub y_hat: f64,
    pub y: f64,
    pub residuals: f64,
    pub label: String,
}

/// Per-observation predictions, ground truth and residuals of one model.
///
/// Rows keep the order of the evaluation set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidualsTable {
    rows: Vec<ResidualRow>,
}

impl ResidualsTable {
    /// Zip the three vectors into rows tagged with `label`.
    pub fn build(y_hat: &[f64], y: &[f64], residuals: &[f64], label: &str) -> Result<Self> {
        Stats::ensure_len("y_hat", y.len(), y_hat.len())?;
        Stats::ensure_len("residuals", y.len(), residuals.len())?;

        let rows = y_hat
            .iter()
            .zip(y)
            .zip(residuals)
            .map(|((&y_hat, &y), &residuals)| ResidualRow {
                y_hat,
                y,
                residuals,
                label: label.to_string(),
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ResidualRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Label shared by every row, `None` for an empty table.
    pub fn label(&self) -> Option<&str> {
        self.rows.first().map(|row| row.label.as_str())
    }

    pub fn residuals(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.residuals).collect()
    }

    pub fn abs_residuals(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.residuals.abs()).collect()
    }
}

/// Default residual: `y_hat - y`, element-wise.
pub fn signed_residuals(y_hat: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    Stats::ensure_len("y_hat", y.len(), y_hat.len())?;
    Ok(y_hat.iter().zip(y).map(|(p, t)| p - t).collect())
}
