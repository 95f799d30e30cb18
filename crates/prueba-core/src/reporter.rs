//! Run observers.
//!
//! The runner reports progress through an injected [`Reporter`] instead of
//! an ambient logger, so its behaviour can be asserted without capturing
//! process output.

use crate::types::{RunSummary, TestResult};

/// Observer of a test run. All hooks default to no-ops.
pub trait Reporter {
    /// Called once before the first test, with the number of tests.
    fn run_started(&mut self, _total: usize) {}

    /// Called when a test enters the running state.
    fn test_started(&mut self, _name: &str) {}

    /// Called after a test passed.
    fn test_passed(&mut self, _result: &TestResult) {}

    /// Called after a test failed.
    fn test_failed(&mut self, _result: &TestResult) {}

    /// Called once after every test has been recorded.
    fn run_finished(&mut self, _summary: &RunSummary) {}

    /// Called after [`Reporter::run_finished`] when at least one test failed.
    fn run_failed(&mut self, _summary: &RunSummary) {}
}

/// Reporter that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn run_started(&mut self, total: usize) {
        tracing::info!(total = total, "starting all tests");
    }

    fn test_started(&mut self, name: &str) {
        tracing::debug!(test = name, "running");
    }

    fn test_passed(&mut self, result: &TestResult) {
        tracing::info!(test = %result.name, duration_ms = result.duration_ms, "PASSED");
    }

    fn test_failed(&mut self, result: &TestResult) {
        tracing::warn!(
            test = %result.name,
            duration_ms = result.duration_ms,
            error = result.error.as_deref().unwrap_or_default(),
            "FAILED"
        );
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        tracing::info!(
            total = summary.total(),
            passed = summary.passed(),
            failed = summary.failed(),
            "test results"
        );
        if summary.all_passed() {
            tracing::info!("all tests passed");
        }
    }

    fn run_failed(&mut self, summary: &RunSummary) {
        for failure in summary.errors() {
            tracing::error!(test = %failure.test, error = %failure.error, "test failure");
        }
    }
}

/// Event captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// Run started with this many tests.
    RunStarted(usize),
    /// Named test started.
    TestStarted(String),
    /// Named test passed.
    TestPassed(String),
    /// Named test failed with this error text.
    TestFailed(String, String),
    /// Run finished with (total, passed, failed).
    RunFinished(usize, usize, usize),
    /// Failures listed, by test name.
    RunFailed(Vec<String>),
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Vec<ReportEvent>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }
}

impl Reporter for RecordingReporter {
    fn run_started(&mut self, total: usize) {
        self.events.push(ReportEvent::RunStarted(total));
    }

    fn test_started(&mut self, name: &str) {
        self.events.push(ReportEvent::TestStarted(name.to_string()));
    }

    fn test_passed(&mut self, result: &TestResult) {
        self.events.push(ReportEvent::TestPassed(result.name.clone()));
    }

    fn test_failed(&mut self, result: &TestResult) {
        self.events.push(ReportEvent::TestFailed(
            result.name.clone(),
            result.error.clone().unwrap_or_default(),
        ));
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        self.events.push(ReportEvent::RunFinished(
            summary.total(),
            summary.passed(),
            summary.failed(),
        ));
    }

    fn run_failed(&mut self, summary: &RunSummary) {
        self.events.push(ReportEvent::RunFailed(
            summary.errors().iter().map(|e| e.test.clone()).collect(),
        ));
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn run_started(&mut self, total: usize) {
        (**self).run_started(total);
    }

    fn test_started(&mut self, name: &str) {
        (**self).test_started(name);
    }

    fn test_passed(&mut self, result: &TestResult) {
        (**self).test_passed(result);
    }

    fn test_failed(&mut self, result: &TestResult) {
        (**self).test_failed(result);
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        (**self).run_finished(summary);
    }

    fn run_failed(&mut self, summary: &RunSummary) {
        (**self).run_failed(summary);
    }
}
