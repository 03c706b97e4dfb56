//! Console output for the `porcelain2json` binary.

use colored::*;

/// Prints an error message to stderr
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// "✕ Error:" is red and the message white; `NO_COLOR` disables both.
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}
