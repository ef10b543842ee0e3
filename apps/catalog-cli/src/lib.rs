//! # Catalog CLI Library
//!
//! Interactive front end for `catalog-core`.
//!
//! ## Module Organization
//! ```text
//! catalog_cli/
//! ├── lib.rs       ◄─── You are here (logging setup & run)
//! ├── args.rs      ◄─── clap flags
//! ├── config.rs    ◄─── Defaults + CATALOG_* env + flags
//! ├── command.rs   ◄─── Menu text and Command enum
//! ├── prompt.rs    ◄─── Prompter trait, line-based Console
//! ├── terminal.rs  ◄─── dialoguer prompts for interactive use
//! ├── display.rs   ◄─── Text / JSON rendering of products
//! ├── session.rs   ◄─── Menu loop, owns the ProductRepository
//! └── error.rs     ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, `RUST_LOG`)
//! 2. Parse flags, load config from env, apply flags
//! 3. Build the session: dialoguer prompts on a terminal, plain lines
//!    over locked stdin/stdout otherwise
//! 4. Seed if requested
//! 5. Run the menu loop

pub mod args;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod prompt;
pub mod session;
pub mod terminal;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use args::Args;
use config::CatalogConfig;
use error::CliResult;
use prompt::{Console, Prompter};
use session::Session;
use terminal::TerminalPrompter;

/// Runs the catalog binary and maps the outcome to an exit code.
pub fn run() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match try_run(&args) {
        Ok(()) => {
            info!("catalog session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "catalog session failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: &Args) -> CliResult<()> {
    let config = CatalogConfig::from_env()?.apply_args(args);
    info!(
        currency = %config.currency_symbol,
        seed = config.seed,
        format = ?config.format,
        "starting catalog session"
    );

    if TerminalPrompter::is_available() {
        run_session(TerminalPrompter::new(), config)
    } else {
        info!("input is not a terminal, reading plain lines");
        run_session(Console::new(io::stdin().lock(), io::stdout().lock()), config)
    }
}

fn run_session<P: Prompter>(prompter: P, config: CatalogConfig) -> CliResult<()> {
    let seed = config.seed;
    let mut session = Session::new(prompter, config);

    if seed {
        session.seed()?;
    }

    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: `warn`, so the menu stays readable
/// - `RUST_LOG=catalog_cli=debug` - Show every dispatched command
///
/// Logs go to stderr; the menu owns stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
