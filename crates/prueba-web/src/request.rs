//! Incoming GET requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A GET request reduced to its query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Query parameters. Repeated keys keep the last value.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl Request {
    /// Creates a request with no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a URL query string, with or without the leading `?`.
    ///
    /// # Errors
    /// Returns an error if the query string is malformed.
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(Self {
            parameters: pairs.into_iter().collect(),
        })
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Returns a parameter value.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}
