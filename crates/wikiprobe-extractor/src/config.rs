//! Configuration for the analysis session and stepwise fallback

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum command names followed up with a detail question
    pub max_stepwise_commands: usize,

    /// Enumerated tokens longer than this (characters) are not command names
    pub max_command_name_chars: usize,

    /// Characters of a detail answer kept when it has no logic label
    pub logic_fallback_chars: usize,

    /// Fetch the documentation structure before asking questions
    pub fetch_structure: bool,
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_stepwise_commands: 20,
            max_command_name_chars: 50,
            logic_fallback_chars: 500,
            fetch_structure: true,
        }
    }
}

impl ExtractorConfig {
    /// Quick preset: fewer follow-up questions, no structure lookup
    pub fn quick() -> Self {
        Self {
            max_stepwise_commands: 8,
            max_command_name_chars: 50,
            logic_fallback_chars: 300,
            fetch_structure: false,
        }
    }

    /// Thorough preset: follows up on more commands and keeps longer fallbacks
    pub fn thorough() -> Self {
        Self {
            max_stepwise_commands: 60,
            max_command_name_chars: 50,
            logic_fallback_chars: 2_000,
            fetch_structure: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_stepwise_commands == 0 {
            return Err(ExtractorError::Config(
                "max_stepwise_commands must be greater than 0".to_string(),
            ));
        }
        if self.max_command_name_chars == 0 {
            return Err(ExtractorError::Config(
                "max_command_name_chars must be greater than 0".to_string(),
            ));
        }
        if self.logic_fallback_chars == 0 {
            return Err(ExtractorError::Config(
                "logic_fallback_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
