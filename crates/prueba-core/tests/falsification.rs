//! Popperian Falsification Tests for Prueba
//!
//! # Reference
//! Popper, K. (1959). *The Logic of Scientific Discovery*. Routledge.
//!
//! Each test in this module attempts to falsify a specific claim about the
//! harness. A passing test means the claim survived the attempt.

mod falsification_tests;
