//! Configuration system for mtflab.
//!
//! Load analysis-run descriptions from TOML or YAML files to control the
//! initial list, the request sequences, and the best/worst search without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use mtflab_config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_toml_str(r#"
//!     initial_list = [0, 1, 2, 3, 4]
//!     random_seed = 42
//!
//!     [[sequences]]
//!     name = "two_cycles"
//!     requests = [0, 1, 2, 3, 4, 0, 1, 2, 3, 4]
//!
//!     [search]
//!     length = 20
//! "#).unwrap();
//!
//! assert_eq!(config.initial_list, vec![0, 1, 2, 3, 4]);
//! assert_eq!(config.sequences.len(), 1);
//! assert_eq!(config.search_length(), Some(20));
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use mtflab_config::AnalysisConfig;
//!
//! let config = AnalysisConfig::load("analysis.toml").unwrap_or_default();
//! // Proceeds with the built-in five-element scenario.
//! ```

use std::path::Path;

use mtflab_core::{Element, ListState};
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

/// Main analysis-run configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisConfig {
    /// Initial ordering of the list; also fixes the element universe.
    pub initial_list: Vec<Element>,

    /// Seed for generated workloads, for reproducible runs.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Named request sequences to run through the engines.
    #[serde(default)]
    pub sequences: Vec<SequenceConfig>,

    /// Best/worst search configuration.
    #[serde(default)]
    pub search: Option<SearchConfig>,
}

/// One named request sequence.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SequenceConfig {
    /// Label used in summaries.
    pub name: String,
    /// The requests, in order.
    pub requests: Vec<Element>,
}

/// Best/worst sequence-search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Length of the sequences to search for.
    pub length: usize,
}

impl Default for AnalysisConfig {
    /// The five-element scenario the analysis narrative is built around.
    fn default() -> Self {
        AnalysisConfig {
            initial_list: vec![0, 1, 2, 3, 4],
            random_seed: None,
            sequences: Vec::new(),
            search: Some(SearchConfig { length: 20 }),
        }
    }
}

impl AnalysisConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
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
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Replaces the initial list.
    pub fn with_initial_list(mut self, initial_list: Vec<Element>) -> Self {
        self.initial_list = initial_list;
        self
    }

    /// Adds a named request sequence.
    pub fn with_sequence(mut self, name: impl Into<String>, requests: Vec<Element>) -> Self {
        self.sequences.push(SequenceConfig {
            name: name.into(),
            requests,
        });
        self
    }

    /// Sets the search length.
    pub fn with_search_length(mut self, length: usize) -> Self {
        self.search = Some(SearchConfig { length });
        self
    }

    /// Sets the workload seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Returns the configured search length, if searching is enabled.
    pub fn search_length(&self) -> Option<usize> {
        self.search.as_ref().map(|s| s.length)
    }

    /// Builds the initial [`ListState`] after validating the config.
    pub fn initial_state(&self) -> Result<ListState, ConfigError> {
        self.validate()?;
        ListState::new(self.initial_list.iter().copied())
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the initial list is empty or
    /// repeats an element, or when a sequence references an element
    /// outside the universe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_list.is_empty() {
            return Err(ConfigError::Invalid(
                "initial_list must not be empty".to_string(),
            ));
        }
        for (i, &element) in self.initial_list.iter().enumerate() {
            if self.initial_list[..i].contains(&element) {
                return Err(ConfigError::Invalid(format!(
                    "initial_list repeats element {element}"
                )));
            }
        }
        for sequence in &self.sequences {
            if let Some(&stray) = sequence
                .requests
                .iter()
                .find(|e| !self.initial_list.contains(e))
            {
                return Err(ConfigError::Invalid(format!(
                    "sequence '{}' requests element {stray} outside the universe",
                    sequence.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
