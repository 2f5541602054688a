use crate::domain::errors::PerformanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model task type, selecting which family of measures is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Regression,
    Classification,
}

impl FromStr for ModelType {
    type Err = PerformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regression" => Ok(ModelType::Regression),
            "classification" => Ok(ModelType::Classification),
            _ => Err(PerformanceError::Configuration {
                reason: format!(
                    "'model_type' must be 'regression' or 'classification', got '{}'",
                    s
                ),
            }),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelType::Regression => write!(f, "regression"),
            ModelType::Classification => write!(f, "classification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(
            "regression".parse::<ModelType>().unwrap(),
            ModelType::Regression
        );
        assert_eq!(
            "Classification".parse::<ModelType>().unwrap(),
            ModelType::Classification
        );
    }

    #[test]
    fn test_parse_unknown_type_is_configuration_error() {
        let err = "foo".parse::<ModelType>().unwrap_err();
        assert!(matches!(err, PerformanceError::Configuration { .. }));
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for model_type in [ModelType::Regression, ModelType::Classification] {
            assert_eq!(model_type.to_string().parse::<ModelType>().unwrap(), model_type);
        }
    }
}
