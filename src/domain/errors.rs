use thiserror::Error;

/// Errors raised while fitting or plotting a model performance explanation.
///
/// Numeric degeneracy (constant labels, zero denominators) is never an error:
/// it surfaces as NaN in the affected metric.
#[derive(Debug, Error)]
pub enum PerformanceError {
    #[error("Invalid configuration: {reason}")]
    Configuration { reason: String },

    #[error("Shape mismatch for {what}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Object at position {index} is not a fitted performance result: {reason}")]
    TypeMismatch { index: usize, reason: String },

    #[error("Explainer '{label}' failed: {reason}")]
    Explainer { label: String, reason: String },

    #[error("Cannot build an ECDF from an empty sample")]
    EmptySample,

    #[error("Chart rendering failed: {reason}")]
    Render { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PerformanceError {
    pub(crate) fn shape(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }
}

pub type Result<T> = std::result::Result<T, PerformanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_formatting() {
        let error = PerformanceError::shape("y_hat", 4, 3);

        let msg = error.to_string();
        assert!(msg.contains("y_hat"));
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_type_mismatch_names_index() {
        let error = PerformanceError::TypeMismatch {
            index: 2,
            reason: "residuals table is missing".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("position 2"));
        assert!(msg.contains("residuals table is missing"));
    }
}
