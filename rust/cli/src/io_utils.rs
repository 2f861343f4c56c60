//! Line input for the interactive session.

use std::io::{self, BufRead};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// The line is trimmed. `Ok(None)` means EOF. Read failures, including
/// input that is not valid UTF-8, are returned to the caller.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use patience_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("move d s\n");
/// assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some("move d s"));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None), // EOF
        _ => Ok(Some(line.trim().to_string())),
    }
}
