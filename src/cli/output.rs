//! Colored terminal output helpers.
//!
//! All user-facing diagnostics go through these functions so we get
//! consistent styling across every command. Everything here writes to
//! stderr: stdout is reserved for secret values and the JSON response.

use console::style;

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}
