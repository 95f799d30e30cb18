//! Data echo endpoint.
//!
//! Logs the payload and hands it back. Every JSON value renders, so the echo
//! has no failure path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of [`save_data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResponse {
    /// Whether the payload was accepted.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// The payload, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl EchoResponse {
    fn saved(data: Value) -> Self {
        Self {
            success: true,
            message: "Saved".to_string(),
            data: Some(data),
        }
    }
}

/// Logs `data` and echoes it back.
///
/// Accepts any JSON value, including `null`.
#[must_use]
pub fn save_data(data: Value) -> EchoResponse {
    tracing::info!(data = %data, "data received");
    EchoResponse::saved(data)
}
