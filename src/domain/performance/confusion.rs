use super::stats::Stats;
use crate::domain::errors::Result;
use serde::{Deserialize, Serialize};

/// Binary confusion counts at a fixed cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positive: usize,
    pub false_positive: usize,
    pub true_negative: usize,
    pub false_negative: usize,
}

impl ConfusionCounts {
    /// Count outcomes of the rule "predicted positive iff `score >= cutoff`".
    ///
    /// The boundary is inclusive. A label equal to `1.0` is positive, any
    /// other label is counted as negative, so the four counts always sum to
    /// the number of observations. NaN scores are predicted negative.
    pub fn from_scores(y_pred: &[f64], y_true: &[f64], cutoff: f64) -> Result<Self> {
        Stats::ensure_len("y_hat", y_true.len(), y_pred.len())?;

        let mut counts = Self::default();
        for (&score, &label) in y_pred.iter().zip(y_true) {
            let predicted_positive = score >= cutoff;
            match (is_positive_label(label), predicted_positive) {
                (true, true) => counts.true_positive += 1,
                (false, true) => counts.false_positive += 1,
                (false, false) => counts.true_negative += 1,
                (true, false) => counts.false_negative += 1,
            }
        }
        Ok(counts)
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }

    /// `tp / (tp + fn)`
    pub fn recall(&self) -> f64 {
        Stats::ratio(
            self.true_positive as f64,
            (self.true_positive + self.false_negative) as f64,
        )
    }

    /// `tp / (tp + fp)`
    pub fn precision(&self) -> f64 {
        Stats::ratio(
            self.true_positive as f64,
            (self.true_positive + self.false_positive) as f64,
        )
    }

    /// `(tp + tn) / total`
    pub fn accuracy(&self) -> f64 {
        Stats::ratio(
            (self.true_positive + self.true_negative) as f64,
            self.total() as f64,
        )
    }

    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        Stats::ratio(2.0 * precision * recall, precision + recall)
    }
}

pub(crate) fn is_positive_label(label: f64) -> bool {
    label == 1.0
}
