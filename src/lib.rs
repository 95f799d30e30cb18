//! Prueba: Self-Testing Request Handler
//!
//! Part of the PAIML Sovereign AI Stack.
//!
//! # Quick Start
//!
//! ```rust
//! use prueba::prelude::*;
//!
//! let summary = Handler::default().test_all().expect("built-in tests pass");
//! assert_eq!(summary.failed(), 0);
//! ```

pub use prueba_core as core;
pub use prueba_web as web;

/// Prelude module for common imports.
pub mod prelude {
    pub use prueba_core::assert::{
        assert_equal, assert_false, assert_not_null, assert_true, json_type,
    };
    pub use prueba_core::{
        AggregateTestFailure, AssertionError, Reporter, RunSummary, TestCase, TestOutcome,
        TestResult, TestRunner, TestStatus, TestSuite, TracingReporter,
    };
    pub use prueba_web::{
        EchoResponse, Handler, Output, Renderable, Request, TestReport, WebConfig, save_data,
    };
}
