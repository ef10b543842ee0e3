//! # Catalog Entry Point
//!
//! The actual setup lives in `lib.rs` so the session can be tested without
//! a terminal.

use std::process::ExitCode;

fn main() -> ExitCode {
    catalog_cli::run()
}
