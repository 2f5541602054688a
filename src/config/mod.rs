//! Configuration module for modelperf.
//!
//! Defaults come from environment variables (optionally a `.env` file loaded
//! by the binary); command-line flags override them.

mod performance_config;

pub use performance_config::PerformanceEnvConfig;
