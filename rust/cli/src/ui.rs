//! UI helper functions for terminal output formatting.
//!
//! Replies to the player go to stdout next to the table; errors and warnings
//! go to stderr with a fixed prefix so scripted sessions can tell them apart.

use std::io::Write;

use patience_engine::command::CommandStatus;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Report a rejected command line, e.g. `Error: Bad argument 2`.
pub fn write_status(err: &mut dyn Write, status: CommandStatus) -> std::io::Result<()> {
    write_error(err, &status.to_string())
}

/// Prompt shown before each command is read.
pub fn write_prompt(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
