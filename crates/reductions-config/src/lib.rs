//! Configuration system for fairness reductions.
//!
//! Load input validation and grouping settings from TOML or YAML so that
//! mitigation entry points can be tuned without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use reductions_config::ReductionsConfig;
//!
//! let config = ReductionsConfig::from_toml_str(r#"
//!     [validation]
//!     enforce_binary_labels = true
//!
//!     [grouping]
//!     sensitive_base_name = "sf_"
//! "#).unwrap();
//!
//! assert!(config.validation.enforce_binary_labels);
//! assert!(config.validation.expect_y);
//! assert_eq!(config.grouping.sensitive_base_name, "sf_");
//! assert_eq!(config.grouping.control_base_name, "control_feature_");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use reductions_config::ReductionsConfig;
//!
//! let config = ReductionsConfig::load("reductions.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use reductions_core::data::Series;
use reductions_core::{GroupFeature, ReductionsError, ValidationOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main reductions configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReductionsConfig {
    /// Input validation applied before data reaches a moment.
    #[serde(default)]
    pub validation: ValidationOptions,

    /// Naming of grouping features.
    #[serde(default)]
    pub grouping: GroupingConfig,
}

impl ReductionsConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.check()
    }

    fn check(self) -> Result<Self, ConfigError> {
        if self.grouping.sensitive_base_name == self.grouping.control_base_name {
            return Err(ConfigError::Invalid(format!(
                "sensitive and control features share the base name '{}'",
                self.grouping.sensitive_base_name
            )));
        }
        Ok(self)
    }

    /// Sets the validation options.
    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the grouping configuration.
    pub fn with_grouping(mut self, grouping: GroupingConfig) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Default-name bases for grouping features.
///
/// A feature without an explicit or intrinsic name is called
/// `"{base}{index}"`, where `index` is its position among the features of
/// the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GroupingConfig {
    pub sensitive_base_name: String,
    pub control_base_name: String,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            sensitive_base_name: "sensitive_feature_".to_string(),
            control_base_name: "control_feature_".to_string(),
        }
    }
}

impl GroupingConfig {
    /// Encodes one sensitive feature.
    pub fn sensitive_feature(
        &self,
        index: usize,
        feature_vector: impl Into<Series>,
        name: Option<&str>,
    ) -> Result<GroupFeature, ReductionsError> {
        GroupFeature::new(&self.sensitive_base_name, feature_vector, index, name)
    }

    /// Encodes one control feature.
    pub fn control_feature(
        &self,
        index: usize,
        feature_vector: impl Into<Series>,
        name: Option<&str>,
    ) -> Result<GroupFeature, ReductionsError> {
        GroupFeature::new(&self.control_base_name, feature_vector, index, name)
    }

    /// Encodes a list of sensitive features, indexed by position.
    pub fn sensitive_features(
        &self,
        features: Vec<Series>,
    ) -> Result<Vec<GroupFeature>, ReductionsError> {
        features
            .into_iter()
            .enumerate()
            .map(|(i, f)| self.sensitive_feature(i, f, None))
            .collect()
    }

    /// Encodes a list of control features, indexed by position.
    pub fn control_features(
        &self,
        features: Vec<Series>,
    ) -> Result<Vec<GroupFeature>, ReductionsError> {
        features
            .into_iter()
            .enumerate()
            .map(|(i, f)| self.control_feature(i, f, None))
            .collect()
    }
}
