use crate::domain::errors::Result;
use crate::domain::ports::Explainer;

/// Explainer over predictions that were computed elsewhere.
///
/// Used when a model's outputs are already on disk or in memory and the
/// model itself is not available.
#[derive(Debug, Clone)]
pub struct PrecomputedExplainer {
    label: String,
    y: Vec<f64>,
    y_hat: Vec<f64>,
    residuals: Option<Vec<f64>>,
}

impl PrecomputedExplainer {
    pub fn new(label: impl Into<String>, y: Vec<f64>, y_hat: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            y,
            y_hat,
            residuals: None,
        }
    }

    /// Use custom residuals instead of `y_hat - y`.
    pub fn with_residuals(mut self, residuals: Vec<f64>) -> Self {
        self.residuals = Some(residuals);
        self
    }
}

impl Explainer for PrecomputedExplainer {
    type Data = [f64];

    fn data(&self) -> &[f64] {
        &self.y_hat
    }

    fn y(&self) -> &[f64] {
        &self.y
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn y_hat(&self) -> Option<&[f64]> {
        Some(&self.y_hat)
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    // Predictions are the data itself.
    fn predict(&self, data: &[f64]) -> Result<Vec<f64>> {
        Ok(data.to_vec())
    }
}
