//! Command handlers for the klondike binary.
//!
//! Each handler takes its output streams as `&mut dyn Write` parameters and
//! propagates failures as [`CliError`](crate::error::CliError).

mod cfg;
mod play;

pub use cfg::handle_show_config;
pub use play::handle_play_command;
