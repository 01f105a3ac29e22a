//! Logging utilities with colored output.
//!
//! Provides the `log!` macro for formatted terminal output with colored
//! module prefixes:
//!
//! ```ignore
//! log!("fetch"; "loaded {} of {} files", ok, total);
//! log!("warn"; "skipping {file}: {err:#}");
//! ```
//!
//! Prefixes are colored by module: `serve` blue, `fetch` green, `warn`
//! magenta, `error` red, everything else yellow.

use colored::{ColoredString, Colorize};
use std::io::{Write, stdout};

/// Fallback line width for truncating single-line messages.
const MAX_LINE_WIDTH: usize = 120;

/// Length of brackets around module name plus the trailing space.
const PREFIX_DECOR_LEN: usize = 3;

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Implementation
// ============================================================================

/// Print a log line with a colored `[module]` prefix.
///
/// Multiline messages are printed in full; single-line messages are
/// truncated to the terminal width.
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();

    if message.contains('\n') {
        writeln!(stdout, "{prefix} {message}").ok();
    } else {
        let max_msg_len = MAX_LINE_WIDTH.saturating_sub(module.len() + PREFIX_DECOR_LEN);
        writeln!(stdout, "{prefix} {}", truncate_str(message, max_msg_len)).ok();
    }

    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "serve" => prefix.bright_blue().bold(),
        "fetch" => prefix.bright_green().bold(),
        "warn" => prefix.bright_magenta().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    // Find the last valid UTF-8 boundary within max_len
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
