use super::predictor::BatchPredictor;
use crate::domain::errors::{PerformanceError, Result};
use crate::domain::ports::Explainer;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::{debug, error};

/// Explainer backed by a fitted smartcore model and its evaluation set.
pub struct ModelExplainer<P: BatchPredictor> {
    model: P,
    data: DenseMatrix<f64>,
    y: Vec<f64>,
    label: String,
}

impl<P: BatchPredictor> ModelExplainer<P> {
    /// Pair a model with its evaluation set. The label defaults to the model name.
    pub fn new(model: P, data: DenseMatrix<f64>, y: Vec<f64>) -> Result<Self> {
        let (rows, _cols) = data.shape();
        if rows != y.len() {
            return Err(PerformanceError::shape("y", rows, y.len()));
        }
        let label = model.name().to_string();
        Ok(Self {
            model,
            data,
            y,
            label,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Build the evaluation matrix from row vectors.
    pub fn from_rows(model: P, rows: &[Vec<f64>], y: Vec<f64>) -> Result<Self> {
        let data = DenseMatrix::from_2d_vec(&rows.to_vec()).map_err(|e| {
            PerformanceError::Explainer {
                label: model.name().to_string(),
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;
        Self::new(model, data, y)
    }
}

impl<P: BatchPredictor> Explainer for ModelExplainer<P> {
    type Data = DenseMatrix<f64>;

    fn data(&self) -> &DenseMatrix<f64> {
        &self.data
    }

    fn y(&self) -> &[f64] {
        &self.y
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn predict(&self, data: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        debug!(model = self.model.name(), rows = data.shape().0, "scoring evaluation set");
        self.model.predict_batch(data).map_err(|e| {
            error!("Model '{}' failed to predict: {}", self.label, e);
            self.failure(e)
        })
    }
}
