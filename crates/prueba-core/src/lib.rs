//! # prueba-core
//!
//! In-process self-test harness for the Prueba request handler.
//!
//! This crate provides:
//! - **Assertions**: equality, non-null, and strict boolean checks that fail
//!   with a readable diagnosis
//! - **Runner**: sequential execution of a declared test list with per-test
//!   failure isolation and an aggregate verdict
//! - **Reporters**: injected observers for run progress (`tracing`, recording, null)
//!
//! ## Iron Lotus Framework
//!
//! - **Jidoka** (自働化): a failing test is stopped and recorded where it fails
//! - **Explicit errors**: failures travel as `Result`, never as hidden state
//!
//! ## Example
//!
//! ```rust
//! use prueba_core::assert::{assert_equal, assert_not_null};
//! use prueba_core::{NullReporter, TestRunner, TestSuite};
//!
//! let suite = TestSuite::builder()
//!     .test("adds", || assert_equal(&(2 + 2), &4, "math works"))
//!     .test("present", || assert_not_null(&Some(0), None))
//!     .build()
//!     .expect("unique names");
//!
//! let summary = TestRunner::with_reporter(NullReporter)
//!     .run(&suite)
//!     .expect("all tests pass");
//! assert_eq!(summary.passed(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assert;
pub mod error;
pub mod reporter;
pub mod runner;
pub mod types;

pub use error::{AggregateTestFailure, AssertionError, TestOutcome};
pub use reporter::{NullReporter, RecordingReporter, ReportEvent, Reporter, TracingReporter};
pub use runner::TestRunner;
pub use types::{
    DuplicateTestName, FailureEntry, RunSummary, TestCase, TestFn, TestResult, TestStatus,
    TestSuite, TestSuiteBuilder,
};
