//! Process exit codes.

/// Session ended normally: won, resigned or input exhausted.
pub const SUCCESS: i32 = 0;

/// Bad arguments, configuration or an I/O failure.
pub const ERROR: i32 = 2;
