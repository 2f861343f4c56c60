//! # Patience CLI Library
//!
//! Console front end for the patience engine: a Klondike game played by
//! typing commands such as `MOVE D S` or `FLIP T3` at a prompt.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments, resolves configuration and plays one game on stdin. Tests and
//! embedders use [`run_with_input`] to supply the command stream themselves.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let mut input = Cursor::new("move d s\nquit\n");
//! let code = patience_cli::run_with_input(
//!     ["klondike", "--seed", "42"],
//!     &mut input,
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Game abandoned."));
//! ```

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod klondike;
pub mod logging;
pub mod render;
pub mod ui;

use cli::KlondikeCli;
use commands::{handle_play_command, handle_show_config};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Reads player commands from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` when the session ends normally, `2` for argument,
/// configuration or I/O errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with player commands read from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match KlondikeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "For full help, run: klondike --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let mut resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::from(e).to_string());
            return exit_code::ERROR;
        }
    };
    if let Err(msg) = config::apply_cli_seed(&mut resolved, cli.seed.as_deref()) {
        if ui::display_warning(err, &msg).is_err() {
            return exit_code::ERROR;
        }
    }

    logging::init_logging(&resolved.config.log_filter);
    tracing::debug!(
        seed = ?resolved.config.seed,
        seed_source = ?resolved.sources.seed,
        "configuration resolved"
    );

    let result = if cli.show_config {
        handle_show_config(&resolved, out)
    } else {
        handle_play_command(resolved.config.seed, out, err, input)
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
