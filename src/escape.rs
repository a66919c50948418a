//! Escape-sequence generation.
//!
//! A colorized write is `RESET`, then the style/background clause, then the
//! foreground clause, then the payload:
//!
//! | pair      | style/background clause      | foreground clause                           |
//! |-----------|------------------------------|---------------------------------------------|
//! | `Named`   | `\x1b[{style};{bg}m`         | `\x1b[{style};{fg}m`                        |
//! | `Rgb`     | `\x1b[{style};49m`           | `\x1b[48;2;{bg}m` then `\x1b[38;2;{fg}m`    |
//! | `Palette` | `\x1b[{style};49m`           | `\x1b[48;5;{bg}m` then `\x1b[38;5;{fg}m`    |

use std::fmt;

use crate::color::ColorPair;
use crate::style::Style;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// The style and color clauses for one colorized write, without the leading
/// reset. Formats directly into the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    pub style: Style,
    pub colors: ColorPair,
}

impl Escape {
    pub fn new(style: Style, colors: impl Into<ColorPair>) -> Self {
        Self {
            style,
            colors: colors.into(),
        }
    }
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.style.code();
        match self.colors {
            ColorPair::Named { fg, bg } => write!(
                f,
                "\x1b[{style};{bg}m\x1b[{style};{fg}m",
                style = style,
                bg = bg.code(),
                fg = fg.code()
            ),
            ColorPair::Rgb { fg, bg } => write!(
                f,
                "\x1b[{};49m\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m",
                style, bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
            ),
            ColorPair::Palette { fg, bg } => write!(
                f,
                "\x1b[{};49m\x1b[48;5;{}m\x1b[38;5;{}m",
                style,
                bg.index(),
                fg.index()
            ),
        }
    }
}

/// Append the style and color clauses to `out`.
pub fn push_sequence(style: Style, colors: impl Into<ColorPair>, out: &mut String) {
    use fmt::Write;
    // Writing into a String cannot fail.
    let _ = write!(out, "{}", Escape::new(style, colors));
}

/// Style and color clauses as a string, without the leading reset.
///
/// Useful for building output by hand, e.g. inside a larger `format!`.
pub fn sequence(style: Style, colors: impl Into<ColorPair>) -> String {
    let mut out = String::new();
    push_sequence(style, colors, &mut out);
    out
}

/// The full prefix a colorized write emits before its payload.
pub fn prefix(style: Style, colors: impl Into<ColorPair>) -> String {
    let mut out = String::from(RESET);
    push_sequence(style, colors, &mut out);
    out
}
