//! Core types for a self-test run.
//!
//! Each test moves through a fixed state machine with no retries:
//! ```text
//! Pending → Running → Passed
//!                   ↘ Failed
//! ```
//! Only the terminal states are recorded in a [`RunSummary`].

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TestOutcome;

/// Zero-argument test procedure.
pub type TestFn = Box<dyn Fn() -> TestOutcome>;

/// A named, parameterless unit of test logic.
pub struct TestCase {
    name: String,
    procedure: TestFn,
}

impl TestCase {
    /// Creates a test case from a name and a procedure.
    #[must_use]
    pub fn new(name: impl Into<String>, procedure: impl Fn() -> TestOutcome + 'static) -> Self {
        Self {
            name: name.into(),
            procedure: Box::new(procedure),
        }
    }

    /// Returns the test name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the procedure once.
    ///
    /// # Errors
    /// Returns whatever assertion failure the procedure produced.
    pub fn invoke(&self) -> TestOutcome {
        (self.procedure)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Rejected suite: two test cases share a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate test name: {0}")]
pub struct DuplicateTestName(pub String);

/// Statically declared, ordered list of uniquely named test cases.
#[derive(Debug, Default)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a suite builder.
    #[must_use]
    pub fn builder() -> TestSuiteBuilder {
        TestSuiteBuilder::default()
    }

    /// Creates a suite from cases in declaration order.
    ///
    /// # Errors
    /// Returns an error if two cases share a name.
    pub fn from_cases(cases: Vec<TestCase>) -> Result<Self, DuplicateTestName> {
        let mut seen = HashSet::with_capacity(cases.len());
        for case in &cases {
            if !seen.insert(case.name()) {
                return Err(DuplicateTestName(case.name().to_string()));
            }
        }
        Ok(Self { cases })
    }

    /// Number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if the suite has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Cases in declaration order.
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Test names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(TestCase::name)
    }
}

/// Builder for [`TestSuite`].
#[derive(Debug, Default)]
pub struct TestSuiteBuilder {
    cases: Vec<TestCase>,
}

impl TestSuiteBuilder {
    /// Appends a test case.
    #[must_use]
    pub fn test(
        mut self,
        name: impl Into<String>,
        procedure: impl Fn() -> TestOutcome + 'static,
    ) -> Self {
        self.cases.push(TestCase::new(name, procedure));
        self
    }

    /// Builds the suite.
    ///
    /// # Errors
    /// Returns an error if two cases share a name.
    pub fn build(self) -> Result<TestSuite, DuplicateTestName> {
        TestSuite::from_cases(self.cases)
    }
}

/// Terminal status of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    /// Procedure returned normally.
    Passed,
    /// Procedure failed an assertion or panicked.
    Failed,
}

impl TestStatus {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Test name.
    pub name: String,
    /// Terminal status.
    pub status: TestStatus,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Error text (failed tests only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResult {
    /// Creates a passed result.
    #[must_use]
    pub fn passed(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Passed,
            duration_ms,
            error: None,
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failed(name: impl Into<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Failed,
            duration_ms,
            error: Some(error.into()),
        }
    }

    /// Returns true if the test passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == TestStatus::Passed
    }
}

/// A failed test, as listed in [`RunSummary::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureEntry {
    /// Test name.
    pub test: String,
    /// Error text.
    pub error: String,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Aggregated counts and per-test results for one run.
///
/// `total == passed + failed == details.len()`, and `errors` is the failed
/// subsequence of `details` in the same order. Fields are read through
/// accessors; [`RunSummary::record`] is the only way to change them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    total: usize,
    passed: usize,
    failed: usize,
    errors: Vec<FailureEntry>,
    details: Vec<TestResult>,
}

impl RunSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of executed tests.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of passed tests.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failed tests.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Failed tests, in execution order.
    #[must_use]
    pub fn errors(&self) -> &[FailureEntry] {
        &self.errors
    }

    /// Every result, in execution order.
    #[must_use]
    pub fn details(&self) -> &[TestResult] {
        &self.details
    }

    /// Appends one result and updates the counters.
    pub fn record(&mut self, result: TestResult) {
        self.total += 1;
        match result.status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => {
                self.failed += 1;
                self.errors.push(FailureEntry {
                    test: result.name.clone(),
                    error: result.error.clone().unwrap_or_default(),
                    duration_ms: result.duration_ms,
                });
            }
        }
        self.details.push(result);
    }

    /// Returns true if no test failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
