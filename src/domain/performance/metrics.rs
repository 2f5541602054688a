use super::classification::ClassificationMetrics;
use super::model_type::ModelType;
use super::regression::RegressionMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The one-row table of named measures produced by a fit.
///
/// Serializes to a flat object whose keys are exactly the measure names of
/// the task type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricsTable {
    Regression(RegressionMetrics),
    Classification(ClassificationMetrics),
}

impl MetricsTable {
    pub fn model_type(&self) -> ModelType {
        match self {
            MetricsTable::Regression(_) => ModelType::Regression,
            MetricsTable::Classification(_) => ModelType::Classification,
        }
    }

    /// Column names and values, in contract order.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        match self {
            MetricsTable::Regression(m) => m.fields(),
            MetricsTable::Classification(m) => m.fields(),
        }
    }

    /// Look up a measure by column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn as_regression(&self) -> Option<&RegressionMetrics> {
        match self {
            MetricsTable::Regression(m) => Some(m),
            MetricsTable::Classification(_) => None,
        }
    }

    pub fn as_classification(&self) -> Option<&ClassificationMetrics> {
        match self {
            MetricsTable::Classification(m) => Some(m),
            MetricsTable::Regression(_) => None,
        }
    }
}

impl fmt::Display for MetricsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        for (name, _) in &fields {
            write!(f, "{:>10}", name)?;
        }
        writeln!(f)?;
        for (_, value) in &fields {
            write!(f, "{:>10.6}", value)?;
        }
        Ok(())
    }
}
