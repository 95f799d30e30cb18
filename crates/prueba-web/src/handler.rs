//! GET request dispatch.
//!
//! A request carrying the configured test flag (default `?test=1`) runs the
//! built-in suite and gets a JSON report; any other request gets the page.

use std::time::SystemTime;

use serde::Serialize;

use prueba_core::{AggregateTestFailure, Reporter, RunSummary, TestRunner};

use crate::config::WebConfig;
use crate::error::{Result, WebError};
use crate::output::{HtmlOutput, MimeType, Output, TextOutput};
use crate::request::Request;
use crate::suite;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");
const TITLE_PLACEHOLDER: &str = "{{title}}";

/// JSON envelope returned by the test endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestReport {
    /// True when every test passed.
    pub success: bool,
    /// RFC 3339 UTC time the report was produced.
    pub timestamp: String,
    /// Full summary (passing runs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<RunSummary>,
    /// Aggregate failure text (failing runs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// One line per failed test (failing runs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl TestReport {
    /// Builds the envelope for a run verdict.
    #[must_use]
    pub fn from_verdict(verdict: std::result::Result<RunSummary, AggregateTestFailure>) -> Self {
        let timestamp = humantime::format_rfc3339_millis(SystemTime::now()).to_string();
        match verdict {
            Ok(summary) => Self {
                success: true,
                timestamp,
                results: Some(summary),
                error: None,
                stack: None,
            },
            Err(failure) => {
                let stack = failure
                    .summary()
                    .errors()
                    .iter()
                    .map(|e| format!("  - {}: {}", e.test, e.error))
                    .collect::<Vec<_>>()
                    .join("\n");
                Self {
                    success: false,
                    timestamp,
                    results: None,
                    error: Some(format!("Error: {failure}")),
                    stack: Some(stack),
                }
            }
        }
    }
}

/// Self-testing GET handler.
#[derive(Debug, Clone, Default)]
pub struct Handler {
    config: WebConfig,
}

impl Handler {
    /// Creates a handler after validating its configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: WebConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Handles a GET request.
    ///
    /// # Errors
    /// Returns an error if the page cannot be loaded or the report cannot
    /// be serialized. Failing tests are reported in the body, not here.
    pub fn handle_get(&self, request: &Request) -> Result<Output> {
        if self.is_test_request(request) {
            tracing::info!("self-test requested");
            return self.test_endpoint().map(Output::Text);
        }
        self.render_page().map(Output::Html)
    }

    fn is_test_request(&self, request: &Request) -> bool {
        request.parameter(&self.config.test_parameter) == Some(self.config.test_value.as_str())
    }

    /// Renders the application page.
    ///
    /// # Errors
    /// Returns an error if a configured template file cannot be read.
    pub fn render_page(&self) -> Result<HtmlOutput> {
        let template = match &self.config.page.template_path {
            Some(path) => std::fs::read_to_string(path).map_err(|source| WebError::Page {
                path: path.clone(),
                source,
            })?,
            None => INDEX_TEMPLATE.to_string(),
        };
        let content = template.replace(TITLE_PLACEHOLDER, &self.config.title);
        tracing::debug!(title = %self.config.title, bytes = content.len(), "page rendered");
        Ok(HtmlOutput::new(self.config.title.clone(), content))
    }

    /// Runs the built-in suite, reporting through `tracing`.
    ///
    /// # Errors
    /// Returns [`WebError::TestsFailed`] if any built-in test failed, or
    /// [`WebError::Suite`] if the suite declares a name twice.
    pub fn test_all(&self) -> Result<RunSummary> {
        self.test_all_with(prueba_core::TracingReporter)
    }

    /// Runs the built-in suite with a custom reporter.
    ///
    /// # Errors
    /// Same as [`Handler::test_all`].
    pub fn test_all_with<R: Reporter>(&self, reporter: R) -> Result<RunSummary> {
        let suite = suite::builtin(self)?;
        Ok(TestRunner::with_reporter(reporter).run(&suite)?)
    }

    fn test_endpoint(&self) -> Result<TextOutput> {
        let verdict = match self.test_all() {
            Ok(summary) => Ok(summary),
            Err(WebError::TestsFailed(failure)) => Err(failure),
            Err(e) => return Err(e),
        };
        let report = TestReport::from_verdict(verdict);
        if !report.success {
            tracing::warn!(error = report.error.as_deref().unwrap_or_default(), "self-test failed");
        }
        let body = serde_json::to_string(&report)?;
        Ok(TextOutput::new(body).with_mime_type(MimeType::Json))
    }
}
