use crate::domain::errors::{PerformanceError, Result};
use crate::domain::performance::residuals::signed_residuals;

/// Model wrapper supplying everything a performance explanation reads.
///
/// Implementations expose ground truth, a label and either cached
/// predictions/residuals or the means to compute them. The performance
/// core only ever borrows an explainer.
pub trait Explainer {
    /// Evaluation data handed to `predict` / `residual`.
    type Data: ?Sized;

    fn data(&self) -> &Self::Data;

    /// Ground truth for every row of `data`.
    fn y(&self) -> &[f64];

    /// Model name shown in tables and chart legends.
    fn label(&self) -> &str;

    /// Cached predictions, if already computed.
    fn y_hat(&self) -> Option<&[f64]> {
        None
    }

    /// Cached residuals, if already computed.
    fn residuals(&self) -> Option<&[f64]> {
        None
    }

    fn predict(&self, data: &Self::Data) -> Result<Vec<f64>>;

    /// Residuals of already computed predictions; `y_hat - y` unless overridden.
    fn residual_from(&self, y_hat: &[f64], y: &[f64]) -> Result<Vec<f64>> {
        signed_residuals(y_hat, y)
    }

    /// Residuals for `data` against `y`.
    fn residual(&self, data: &Self::Data, y: &[f64]) -> Result<Vec<f64>> {
        let y_hat = self.predict(data)?;
        self.residual_from(&y_hat, y)
    }

    /// Wrap a backend failure into an error tagged with this explainer's label.
    fn failure(&self, reason: impl Into<String>) -> PerformanceError
    where
        Self: Sized,
    {
        PerformanceError::Explainer {
            label: self.label().to_string(),
            reason: reason.into(),
        }
    }
}
