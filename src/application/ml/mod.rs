pub mod predictor;
pub mod smartcore_explainer;

pub use predictor::BatchPredictor;
pub use smartcore_explainer::ModelExplainer;
