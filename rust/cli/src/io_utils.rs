//! Input helpers for interactive commands.

use std::io::{BufRead, Cursor};

/// Environment variable whose contents replace stdin for `play`.
pub const TEST_INPUT_ENV: &str = "CARDDUEL_TEST_INPUT";

/// Reads one trimmed line. Returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use cardduel_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  hit \n");
/// assert_eq!(read_stdin_line(&mut input), Some("hit".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Scripted input from [`TEST_INPUT_ENV`], if set.
pub fn scripted_input() -> Option<Cursor<Vec<u8>>> {
    std::env::var(TEST_INPUT_ENV)
        .ok()
        .map(|s| Cursor::new(s.into_bytes()))
}
