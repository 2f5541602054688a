use super::classification::ClassificationMetrics;
use super::confusion::ConfusionCounts;
use super::metrics::MetricsTable;
use super::model_type::ModelType;
use super::regression::RegressionMetrics;
use super::residuals::ResidualsTable;
use crate::domain::errors::{PerformanceError, Result};
use crate::domain::ports::Explainer;
use std::borrow::Cow;
use tracing::info;

pub const DEFAULT_CUTOFF: f64 = 0.5;

/// Dataset-level performance of one model.
///
/// Created empty, populated by [`PerformanceResult::fit`]. Every fit
/// recomputes both tables from scratch; a failed fit leaves the previous
/// tables untouched.
#[derive(Debug, Clone)]
pub struct PerformanceResult {
    model_type: ModelType,
    cutoff: f64,
    metrics: Option<MetricsTable>,
    residuals: Option<ResidualsTable>,
    confusion: Option<ConfusionCounts>,
}

impl PerformanceResult {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            cutoff: DEFAULT_CUTOFF,
            metrics: None,
            residuals: None,
            confusion: None,
        }
    }

    /// Build from a textual model type, as found in configuration.
    pub fn from_config(model_type: &str, cutoff: f64) -> Result<Self> {
        let model_type = model_type.parse::<ModelType>()?;
        Self::new(model_type).with_cutoff(cutoff)
    }

    /// Classification cutoff; must lie strictly between 0 and 1.
    pub fn with_cutoff(mut self, cutoff: f64) -> Result<Self> {
        if !(cutoff > 0.0 && cutoff < 1.0) {
            return Err(PerformanceError::Configuration {
                reason: format!("'cutoff' must be in (0, 1), got {}", cutoff),
            });
        }
        self.cutoff = cutoff;
        Ok(self)
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Measures of the last successful fit.
    pub fn metrics_table(&self) -> Option<&MetricsTable> {
        self.metrics.as_ref()
    }

    /// Per-observation residuals of the last successful fit.
    pub fn residuals_table(&self) -> Option<&ResidualsTable> {
        self.residuals.as_ref()
    }

    /// Confusion counts of the last successful classification fit.
    pub fn confusion(&self) -> Option<&ConfusionCounts> {
        self.confusion.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.metrics.is_some()
    }

    pub fn label(&self) -> Option<&str> {
        self.residuals.as_ref().and_then(|table| table.label())
    }

    /// Compute the measures and residual table for `explainer`.
    pub fn fit<E: Explainer + ?Sized>(&mut self, explainer: &E) -> Result<()> {
        let y_true = explainer.y();

        let y_pred: Cow<'_, [f64]> = match explainer.y_hat() {
            Some(cached) => Cow::Borrowed(cached),
            None => Cow::Owned(explainer.predict(explainer.data())?),
        };
        let residuals: Cow<'_, [f64]> = match explainer.residuals() {
            Some(cached) => Cow::Borrowed(cached),
            // reuse the predictions above instead of scoring the data again
            None => Cow::Owned(explainer.residual_from(&y_pred, y_true)?),
        };

        let (metrics, confusion) = match self.model_type {
            ModelType::Regression => (
                MetricsTable::Regression(RegressionMetrics::calculate(&y_pred, y_true)?),
                None,
            ),
            ModelType::Classification => {
                let (metrics, counts) =
                    ClassificationMetrics::calculate(&y_pred, y_true, self.cutoff)?;
                (MetricsTable::Classification(metrics), Some(counts))
            }
        };
        let table = ResidualsTable::build(&y_pred, y_true, &residuals, explainer.label())?;

        info!(
            label = explainer.label(),
            model_type = %self.model_type,
            observations = table.len(),
            "Model performance fitted"
        );

        self.metrics = Some(metrics);
        self.residuals = Some(table);
        self.confusion = confusion;
        Ok(())
    }
}

/// Anything that can contribute one series to a residual overlay chart.
pub trait ResidualSource {
    fn residuals_table(&self) -> Option<&ResidualsTable>;
}

impl ResidualSource for PerformanceResult {
    fn residuals_table(&self) -> Option<&ResidualsTable> {
        self.residuals.as_ref()
    }
}

impl ResidualSource for ResidualsTable {
    fn residuals_table(&self) -> Option<&ResidualsTable> {
        Some(self)
    }
}
