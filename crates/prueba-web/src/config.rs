//! Handler configuration.
//!
//! Per Iron Lotus Framework: Configuration is validated at load time (Poka-Yoke),
//! with sensible defaults and clear error messages.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WebError};

/// Request handler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Title of the rendered page.
    #[serde(default = "default_title")]
    pub title: String,

    /// Query parameter that selects the test endpoint.
    #[serde(default = "default_test_parameter")]
    pub test_parameter: String,

    /// Value of [`WebConfig::test_parameter`] that runs the tests.
    #[serde(default = "default_test_value")]
    pub test_value: String,

    /// Page rendering.
    #[serde(default)]
    pub page: PageConfig,
}

fn default_title() -> String {
    "My App".to_string()
}

fn default_test_parameter() -> String {
    "test".to_string()
}

fn default_test_value() -> String {
    "1".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            test_parameter: default_test_parameter(),
            test_value: default_test_value(),
            page: PageConfig::default(),
        }
    }
}

impl WebConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(WebError::config("title cannot be empty"));
        }
        if self.test_parameter.is_empty() {
            return Err(WebError::config("test_parameter cannot be empty"));
        }
        if !self
            .test_parameter
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(WebError::config(
                "test_parameter must contain only alphanumeric characters, hyphens, and underscores",
            ));
        }
        if self.test_value.is_empty() {
            return Err(WebError::config("test_value cannot be empty"));
        }
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed or is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| WebError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| WebError::config(format!("failed to read config: {e}")))?;
        Self::from_toml_str(&content)
    }
}

/// Page rendering configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Template file to read at render time; the embedded page when unset.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}
