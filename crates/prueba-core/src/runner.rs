//! Sequential test runner.
//!
//! # Toyota Way: Jidoka (自働化)
//! Every failure is stopped at the test that raised it and recorded; the
//! line keeps moving, and the run as a whole is rejected at the end.
//!
//! Tests run strictly in declaration order on the calling thread. Each
//! invocation is wrapped independently, so an assertion failure or a panic
//! in one test never prevents the next from running or being recorded.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::error::{AggregateTestFailure, AssertionError};
use crate::reporter::{Reporter, TracingReporter};
use crate::types::{RunSummary, TestCase, TestResult, TestSuite};

/// Runs an ordered list of test cases and aggregates their results.
#[derive(Debug, Default)]
pub struct TestRunner<R = TracingReporter> {
    reporter: R,
}

impl TestRunner {
    /// Creates a runner that reports through `tracing`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reporter: TracingReporter,
        }
    }
}

impl<R: Reporter> TestRunner<R> {
    /// Creates a runner with a custom reporter.
    #[must_use]
    pub const fn with_reporter(reporter: R) -> Self {
        Self { reporter }
    }

    /// Returns the reporter.
    #[must_use]
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consumes the runner, returning the reporter.
    #[must_use]
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Runs every test and fails the run if any test failed.
    ///
    /// Names are unique within a run because a [`TestSuite`] cannot be
    /// built with duplicates.
    ///
    /// # Errors
    /// Returns [`AggregateTestFailure`] once all tests have been recorded,
    /// if at least one of them failed.
    pub fn run(&mut self, suite: &TestSuite) -> Result<RunSummary, AggregateTestFailure> {
        let summary = self.execute(suite);
        if summary.all_passed() {
            return Ok(summary);
        }
        self.reporter.run_failed(&summary);
        Err(AggregateTestFailure::new(summary))
    }

    /// Runs every test and returns the summary without judging it.
    pub fn execute(&mut self, suite: &TestSuite) -> RunSummary {
        let mut summary = RunSummary::new();
        self.reporter.run_started(suite.len());

        for test in suite.cases() {
            let result = self.run_one(test);
            summary.record(result);
        }

        self.reporter.run_finished(&summary);
        summary
    }

    fn run_one(&mut self, test: &TestCase) -> TestResult {
        let start = Instant::now();
        self.reporter.test_started(test.name());

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| test.invoke()))
            .unwrap_or_else(|payload| Err(panic_error(payload.as_ref())));
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(()) => {
                let result = TestResult::passed(test.name(), duration_ms);
                self.reporter.test_passed(&result);
                result
            }
            Err(e) => {
                let result = TestResult::failed(test.name(), e.to_string(), duration_ms);
                self.reporter.test_failed(&result);
                result
            }
        }
    }
}

fn panic_error(payload: &(dyn Any + Send)) -> AssertionError {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    AssertionError::new(format!("test panicked: {detail}"))
}
