use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;

/// Interface for fitted models scored over a whole evaluation matrix
pub trait BatchPredictor {
    /// One prediction per row of `x`
    fn predict_batch(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>, String>;

    /// Get model name/type
    fn name(&self) -> &str;
}

impl BatchPredictor for RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>> {
    fn predict_batch(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>, String> {
        self.predict(x)
            .map_err(|e| format!("Prediction failed: {}", e))
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}

impl BatchPredictor for LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>> {
    fn predict_batch(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>, String> {
        self.predict(x)
            .map_err(|e| format!("Prediction failed: {}", e))
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }
}
