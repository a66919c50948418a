//! Ready-made escape sequences for quick `format!` use.
//!
//! ```
//! use colorized::ansi;
//!
//! println!("{}warning:{} disk almost full", ansi::BOLD_YELLOW, ansi::RESET);
//! ```

pub use crate::escape::RESET;

pub const BLACK: &str = "\x1b[0;30m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const MAGENTA: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";
pub const WHITE: &str = "\x1b[0;37m";
pub const BRIGHT_BLACK: &str = "\x1b[0;90m";
pub const BRIGHT_RED: &str = "\x1b[0;91m";
pub const BRIGHT_GREEN: &str = "\x1b[0;92m";
pub const BRIGHT_YELLOW: &str = "\x1b[0;93m";
pub const BRIGHT_BLUE: &str = "\x1b[0;94m";
pub const BRIGHT_MAGENTA: &str = "\x1b[0;95m";
pub const BRIGHT_CYAN: &str = "\x1b[0;96m";
pub const BRIGHT_WHITE: &str = "\x1b[0;97m";

pub const BOLD_BLACK: &str = "\x1b[1;30m";
pub const BOLD_RED: &str = "\x1b[1;31m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_BLUE: &str = "\x1b[1;34m";
pub const BOLD_MAGENTA: &str = "\x1b[1;35m";
pub const BOLD_CYAN: &str = "\x1b[1;36m";
pub const BOLD_WHITE: &str = "\x1b[1;37m";
pub const BOLD_BRIGHT_BLACK: &str = "\x1b[1;90m";
pub const BOLD_BRIGHT_RED: &str = "\x1b[1;91m";
pub const BOLD_BRIGHT_GREEN: &str = "\x1b[1;92m";
pub const BOLD_BRIGHT_YELLOW: &str = "\x1b[1;93m";
pub const BOLD_BRIGHT_BLUE: &str = "\x1b[1;94m";
pub const BOLD_BRIGHT_MAGENTA: &str = "\x1b[1;95m";
pub const BOLD_BRIGHT_CYAN: &str = "\x1b[1;96m";
pub const BOLD_BRIGHT_WHITE: &str = "\x1b[1;97m";
