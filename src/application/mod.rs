// Explainers over precomputed outputs
pub mod explainer;

// Explainers over fitted models
pub mod ml;
