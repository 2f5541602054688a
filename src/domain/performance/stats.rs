use crate::domain::errors::{PerformanceError, Result};
use statrs::statistics::{Data, Distribution, OrderStatistics, RankTieBreaker};

/// Shared statistics helpers for the performance measures.
///
/// Every helper reports undefined quantities as NaN instead of failing.
pub struct Stats;

impl Stats {
    /// Arithmetic mean, NaN for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        Data::new(values.to_vec()).mean().unwrap_or(f64::NAN)
    }

    /// Median, NaN for an empty slice or when any value is NaN.
    pub fn median(values: &[f64]) -> f64 {
        if values.is_empty() || values.iter().any(|v| v.is_nan()) {
            return f64::NAN;
        }
        Data::new(values.to_vec()).quantile(0.5)
    }

    /// 1-based ranks in input order, ties share the average of their ranks.
    ///
    /// Callers must filter NaN first.
    pub fn average_ranks(values: &[f64]) -> Vec<f64> {
        Data::new(values.to_vec()).ranks(RankTieBreaker::Average)
    }

    /// `numerator / denominator`, NaN when the denominator is zero.
    pub fn ratio(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            f64::NAN
        } else {
            numerator / denominator
        }
    }

    /// Fails unless `actual` has exactly `expected` entries.
    pub fn ensure_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(PerformanceError::shape(what, expected, actual));
        }
        Ok(())
    }
}
