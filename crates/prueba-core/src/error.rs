//! Harness error types.
//!
//! Two kinds only: [`AssertionError`] lives inside a single test and is
//! always absorbed by the runner; [`AggregateTestFailure`] is the one error
//! the runner hands back to its caller, after the whole run is recorded.

use crate::types::RunSummary;

/// Result type alias for test procedures.
pub type TestOutcome = std::result::Result<(), AssertionError>;

/// Raised by a failed predicate check inside a test.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    /// Creates an assertion error with a diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Raised by the runner after a full run in which at least one test failed.
///
/// Owns the completed summary so callers can still render every outcome.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Tests failed: {} out of {}", summary.failed(), summary.total())]
pub struct AggregateTestFailure {
    summary: RunSummary,
}

impl AggregateTestFailure {
    /// Wraps a completed summary.
    #[must_use]
    pub const fn new(summary: RunSummary) -> Self {
        Self { summary }
    }

    /// Number of failed tests.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.summary.failed()
    }

    /// Number of executed tests.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.summary.total()
    }

    /// Returns the recorded summary.
    #[must_use]
    pub const fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Consumes the error, returning the recorded summary.
    #[must_use]
    pub fn into_summary(self) -> RunSummary {
        self.summary
    }
}
