use crate::application::explainer::PrecomputedExplainer;
use crate::domain::errors::Result;
use crate::domain::ports::Explainer;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// One evaluation row as exported by a scoring job.
#[derive(Debug, Deserialize)]
struct EvaluationRecord {
    y: f64,
    y_hat: f64,
    residuals: Option<f64>,
}

/// Load `y,y_hat[,residuals]` rows into an explainer.
///
/// The label defaults to the file stem. Residuals are used only when every
/// row carries one.
pub fn load_explainer(path: &Path, label: Option<&str>) -> Result<PrecomputedExplainer> {
    let file = File::open(path)?;
    let label = match label {
        Some(l) => l.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string()),
    };
    let explainer = read_explainer(BufReader::new(file), &label)?;
    info!("Loaded {} evaluation rows for '{}' from {:?}", explainer.y().len(), label, path);
    Ok(explainer)
}

pub fn read_explainer<R: Read>(reader: R, label: &str) -> Result<PrecomputedExplainer> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut y = Vec::new();
    let mut y_hat = Vec::new();
    let mut residuals = Vec::new();
    for record in rdr.deserialize() {
        let record: EvaluationRecord = record?;
        y.push(record.y);
        y_hat.push(record.y_hat);
        residuals.push(record.residuals);
    }

    let provided = residuals.iter().filter(|r| r.is_some()).count();
    let explainer = PrecomputedExplainer::new(label, y, y_hat);
    if provided == 0 {
        return Ok(explainer);
    }
    if provided < residuals.len() {
        warn!(
            "'{}': {} of {} rows lack a residual, falling back to y_hat - y",
            label,
            residuals.len() - provided,
            residuals.len()
        );
        return Ok(explainer);
    }
    Ok(explainer.with_residuals(residuals.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PerformanceError;

    #[test]
    fn test_read_without_residuals() {
        let csv = "y,y_hat\n1,1\n2,2\n3,3\n4,5\n";
        let explainer = read_explainer(csv.as_bytes(), "lm").unwrap();

        assert_eq!(explainer.y(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(explainer.y_hat().unwrap(), &[1.0, 2.0, 3.0, 5.0]);
        assert!(explainer.residuals().is_none());
        assert_eq!(explainer.label(), "lm");
    }

    #[test]
    fn test_read_with_residuals() {
        let csv = "y,y_hat,residuals\n1,0.8,0.2\n0,0.3,-0.3\n";
        let explainer = read_explainer(csv.as_bytes(), "clf").unwrap();
        assert_eq!(explainer.residuals().unwrap(), &[0.2, -0.3]);
    }

    #[test]
    fn test_partial_residuals_fall_back() {
        let csv = "y,y_hat,residuals\n1,0.8,0.2\n0,0.3,\n";
        let explainer = read_explainer(csv.as_bytes(), "clf").unwrap();
        assert!(explainer.residuals().is_none());
    }

    #[test]
    fn test_malformed_value_is_csv_error() {
        let csv = "y,y_hat\n1,abc\n";
        let err = read_explainer(csv.as_bytes(), "bad").unwrap_err();
        assert!(matches!(err, PerformanceError::Csv(_)));
    }
}
