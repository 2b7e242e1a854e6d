//! Terminal message helpers shared by commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Writes an input prompt without a trailing newline.
pub fn prompt(out: &mut dyn Write, hint: &str) -> std::io::Result<()> {
    write!(out, "{}> ", hint)?;
    out.flush()
}
