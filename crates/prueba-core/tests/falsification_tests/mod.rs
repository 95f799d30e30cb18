//! Falsification tests, grouped by claim.

// Allow test-specific patterns that are denied in production code
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod assertions;
mod runner;
