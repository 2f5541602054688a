// Dataset-level model performance
pub mod classification;
pub mod confusion;
pub mod ecdf;
pub mod metrics;
pub mod model_performance;
pub mod model_type;
pub mod regression;
pub mod residuals;
pub mod stats;

pub use classification::ClassificationMetrics;
pub use confusion::ConfusionCounts;
pub use ecdf::Ecdf;
pub use metrics::MetricsTable;
pub use model_performance::{DEFAULT_CUTOFF, PerformanceResult, ResidualSource};
pub use model_type::ModelType;
pub use regression::RegressionMetrics;
pub use residuals::{ResidualRow, ResidualsTable};
