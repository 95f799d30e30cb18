// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Prueba Self-Test Example
//!
//! Sends one GET request through the handler and prints the response.
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in tests and print the JSON report
//! cargo run --example selftest
//!
//! # Render the page instead
//! cargo run --example selftest -- ""
//!
//! # Use a config file
//! cargo run --example selftest -- "test=1" --config prueba.toml
//! ```

use prueba::prelude::*;
use prueba::web::MimeType;

fn main() {
    // Initialize tracing for log output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let config_path = config_path(&args);
    let config = config_path.map_or_else(WebConfig::default, |path| {
        WebConfig::load(path).expect("failed to load config")
    });
    let query = args
        .iter()
        .find(|a| !a.starts_with("--") && Some(*a) != config_path)
        .map_or("test=1", String::as_str);

    let handler = Handler::new(config).expect("invalid config");
    let request = Request::from_query(query).expect("invalid query string");
    let output = handler.handle_get(&request).expect("request failed");

    println!("Content-Type: {}", output.mime_type());
    println!();
    println!("{}", output.content());

    if output.mime_type() == MimeType::Json && output.content().contains("\"success\":false") {
        std::process::exit(1);
    }
}

fn config_path(args: &[String]) -> Option<&String> {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
}

fn print_help() {
    println!("Usage: selftest [QUERY] [--config PATH]");
    println!();
    println!("  QUERY          URL query string (default: test=1)");
    println!("  --config PATH  TOML handler configuration");
}
