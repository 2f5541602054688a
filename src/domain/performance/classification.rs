use super::confusion::{ConfusionCounts, is_positive_label};
use super::stats::Stats;
use crate::domain::errors::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification measures for one model on one evaluation set.
///
/// Field names are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub recall: f64,
    pub precision: f64,
    pub f1: f64,
    pub accuracy: f64,
    pub auc: f64,
}

impl ClassificationMetrics {
    pub const FIELDS: [&'static str; 5] = ["recall", "precision", "f1", "accuracy", "auc"];

    /// Calculate all classification measures at the given cutoff.
    ///
    /// Returns the confusion counts alongside the measures.
    pub fn calculate(
        y_pred: &[f64],
        y_true: &[f64],
        cutoff: f64,
    ) -> Result<(Self, ConfusionCounts)> {
        let counts = ConfusionCounts::from_scores(y_pred, y_true, cutoff)?;
        let metrics = Self {
            recall: counts.recall(),
            precision: counts.precision(),
            f1: counts.f1(),
            accuracy: counts.accuracy(),
            auc: auc(y_pred, y_true)?,
        };

        debug!(?metrics, ?counts, cutoff, "classification metrics computed");
        Ok((metrics, counts))
    }

    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("recall", self.recall),
            ("precision", self.precision),
            ("f1", self.f1),
            ("accuracy", self.accuracy),
            ("auc", self.auc),
        ]
    }
}

/// Area under the ROC curve via the Mann-Whitney rank-sum statistic.
///
/// Tied scores share their average rank, which matches the trapezoidal ROC
/// area. NaN when one of the classes is absent or any score is NaN.
pub fn auc(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    Stats::ensure_len("y_hat", y_true.len(), y_pred.len())?;

    if y_pred.iter().any(|s| s.is_nan()) {
        return Ok(f64::NAN);
    }

    let n_pos = y_true.iter().filter(|&&y| is_positive_label(y)).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Ok(f64::NAN);
    }

    let ranks = Stats::average_ranks(y_pred);
    let pos_rank_sum: f64 = ranks
        .iter()
        .zip(y_true)
        .filter(|(_, y)| is_positive_label(**y))
        .map(|(r, _)| r)
        .sum();

    let n_pos = n_pos as f64;
    let u = pos_rank_sum - n_pos * (n_pos + 1.0) / 2.0;
    Ok(u / (n_pos * n_neg as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_reference_example() {
        let y = [1.0, 0.0, 1.0, 0.0];
        let y_hat = [0.6, 0.4, 0.3, 0.2];

        let (m, counts) = ClassificationMetrics::calculate(&y_hat, &y, 0.5).unwrap();

        assert_eq!(counts.total(), 4);
        assert_eq!(m.recall, 0.5);
        assert_eq!(m.precision, 1.0);
        assert_eq!(m.accuracy, 0.75);
        assert!((m.f1 - 2.0 / 3.0).abs() < EPS);
        // positive pairs: (0.6 > 0.4), (0.6 > 0.2), (0.3 < 0.4), (0.3 > 0.2) -> 3/4
        assert!((m.auc - 0.75).abs() < EPS);
    }

    #[test]
    fn test_auc_perfect_and_inverted() {
        let y = [0.0, 0.0, 1.0, 1.0];
        assert!((auc(&[0.1, 0.2, 0.8, 0.9], &y).unwrap() - 1.0).abs() < EPS);
        assert!(auc(&[0.9, 0.8, 0.2, 0.1], &y).unwrap().abs() < EPS);
    }

    #[test]
    fn test_auc_ties_count_half() {
        let y = [0.0, 1.0];
        assert!((auc(&[0.5, 0.5], &y).unwrap() - 0.5).abs() < EPS);

        // pairs: (0.7 vs 0.7) = 0.5, (0.7 vs 0.1) = 1, (0.9 vs 0.7) = 1, (0.9 vs 0.1) = 1
        let y = [1.0, 1.0, 0.0, 0.0];
        let score = auc(&[0.7, 0.9, 0.7, 0.1], &y).unwrap();
        assert!((score - 3.5 / 4.0).abs() < EPS);
    }

    #[test]
    fn test_auc_single_class_is_nan() {
        assert!(auc(&[0.1, 0.9], &[1.0, 1.0]).unwrap().is_nan());
        assert!(auc(&[0.1, 0.9], &[0.0, 0.0]).unwrap().is_nan());
        assert!(auc(&[], &[]).unwrap().is_nan());
    }

    #[test]
    fn test_auc_nan_score_is_nan() {
        assert!(auc(&[0.1, f64::NAN], &[0.0, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_field_order_matches_contract() {
        let (m, _) = ClassificationMetrics::calculate(&[0.2, 0.8], &[0.0, 1.0], 0.5).unwrap();
        let names: Vec<&str> = m.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ClassificationMetrics::FIELDS);
    }
}
