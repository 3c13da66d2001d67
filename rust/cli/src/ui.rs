//! UI helper functions for terminal output formatting.

use std::io::Write;

/// Write a one-line error to `err` with the "Error:" prefix.
pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}
