use crate::domain::errors::{PerformanceError, Result};

/// Empirical cumulative distribution function of a numeric sample.
///
/// The sample is sorted once; each query is a binary search, so evaluating
/// at every sample point costs `O(n log n)` overall. NaN sorts after every
/// number and is never `<=` a number, so `F(NaN) = 1`.
#[derive(Debug, Clone)]
pub struct Ecdf {
    sorted: Vec<f64>,
}

impl Ecdf {
    pub fn new(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(PerformanceError::EmptySample);
        }
        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.is_nan().cmp(&b.is_nan()).then(a.total_cmp(b)));
        Ok(Self { sorted })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// `F(x)`: fraction of sample values `<= x`.
    pub fn eval(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 1.0;
        }
        let at_or_below = self.sorted.partition_point(|&v| v <= x);
        at_or_below as f64 / self.sorted.len() as f64
    }

    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// `G(x) = 1 - F(x)`: fraction of sample values `> x`.
    pub fn reverse(&self, x: f64) -> f64 {
        1.0 - self.eval(x)
    }

    pub fn reverse_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.reverse(x)).collect()
    }

    /// Sorted distinct sample values.
    pub fn unique_values(&self) -> Vec<f64> {
        let mut unique = self.sorted.clone();
        unique.dedup_by(|a, b| a.total_cmp(b).is_eq());
        unique
    }
}
