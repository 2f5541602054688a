//! Performance explanation defaults loaded from environment variables.

use crate::domain::performance::DEFAULT_CUTOFF;
use crate::interfaces::plot::{DEFAULT_TITLE, PlotConfig};
use anyhow::{Context, Result};
use std::env;

/// Environment configuration for fitting and plotting
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceEnvConfig {
    pub model_type: Option<String>,
    pub cutoff: f64,
    pub plot_title: String,
    pub show: bool,
}

impl Default for PerformanceEnvConfig {
    fn default() -> Self {
        Self {
            model_type: None,
            cutoff: DEFAULT_CUTOFF,
            plot_title: DEFAULT_TITLE.to_string(),
            show: false,
        }
    }
}

impl PerformanceEnvConfig {
    /// Reads `MODEL_PERFORMANCE_TYPE`, `MODEL_PERFORMANCE_CUTOFF`,
    /// `MODEL_PERFORMANCE_TITLE` and `MODEL_PERFORMANCE_SHOW`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cutoff = match lookup("MODEL_PERFORMANCE_CUTOFF") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid MODEL_PERFORMANCE_CUTOFF: {}", raw))?,
            None => defaults.cutoff,
        };
        if !(cutoff > 0.0 && cutoff < 1.0) {
            anyhow::bail!("MODEL_PERFORMANCE_CUTOFF must be in (0, 1), got {}", cutoff);
        }

        let show = match lookup("MODEL_PERFORMANCE_SHOW") {
            Some(raw) => raw
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .with_context(|| format!("Invalid MODEL_PERFORMANCE_SHOW: {}", raw))?,
            None => defaults.show,
        };

        Ok(Self {
            model_type: lookup("MODEL_PERFORMANCE_TYPE"),
            cutoff,
            plot_title: lookup("MODEL_PERFORMANCE_TITLE").unwrap_or(defaults.plot_title),
            show,
        })
    }

    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            title: self.plot_title.clone(),
            show: self.show,
            ..PlotConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PerformanceEnvConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PerformanceEnvConfig::default());
        assert_eq!(config.plot_config(), PlotConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = PerformanceEnvConfig::from_lookup(lookup(&[
            ("MODEL_PERFORMANCE_TYPE", "classification"),
            ("MODEL_PERFORMANCE_CUTOFF", "0.3"),
            ("MODEL_PERFORMANCE_TITLE", "Holdout residuals"),
            ("MODEL_PERFORMANCE_SHOW", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.model_type.as_deref(), Some("classification"));
        assert_eq!(config.cutoff, 0.3);
        assert!(config.show);
        assert_eq!(config.plot_config().title, "Holdout residuals");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(
            PerformanceEnvConfig::from_lookup(lookup(&[("MODEL_PERFORMANCE_CUTOFF", "abc")]))
                .is_err()
        );
        assert!(
            PerformanceEnvConfig::from_lookup(lookup(&[("MODEL_PERFORMANCE_CUTOFF", "1.5")]))
                .is_err()
        );
        assert!(
            PerformanceEnvConfig::from_lookup(lookup(&[("MODEL_PERFORMANCE_SHOW", "maybe")]))
                .is_err()
        );
    }
}
