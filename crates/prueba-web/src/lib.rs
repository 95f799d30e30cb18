//! # prueba-web
//!
//! Self-testing GET handler.
//!
//! This crate provides:
//! - **Page endpoint**: renders the application page
//! - **Test endpoint**: `?test=1` runs the built-in suite and returns a JSON report
//! - **Data echo**: [`save_data`] logs a JSON payload and hands it back
//! - **Configuration**: TOML-backed [`WebConfig`], validated on load
//!
//! ## Example
//!
//! ```rust
//! use prueba_web::{Handler, Renderable, Request};
//!
//! let handler = Handler::default();
//! let output = handler
//!     .handle_get(&Request::from_query("?test=1").expect("valid query"))
//!     .expect("report renders");
//! assert!(output.content().contains("\"success\":true"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod echo;
pub mod error;
pub mod handler;
pub mod output;
pub mod request;
pub mod suite;

pub use config::{PageConfig, WebConfig};
pub use echo::{EchoResponse, save_data};
pub use error::{Result, WebError};
pub use handler::{Handler, TestReport};
pub use output::{HtmlOutput, MimeType, Output, Renderable, TextOutput};
pub use request::Request;
