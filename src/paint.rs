//! Painted values.
//!
//! `Painted` pairs a value with a style and colors. Formatting it renders the
//! same bytes as a colorized write, so it can be used anywhere a `Display`
//! value is accepted.

use std::fmt;

use crate::color::ColorPair;
use crate::escape::{Escape, RESET};
use crate::style::Style;

/// A value with a style and colors attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painted<T> {
    escape: Escape,
    value: T,
    reset: bool,
}

impl<T> Painted<T> {
    pub fn new(style: Style, colors: impl Into<ColorPair>, value: T) -> Self {
        Self {
            escape: Escape::new(style, colors),
            value,
            reset: false,
        }
    }

    /// Also render a reset after the value.
    #[must_use]
    pub fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }

    pub fn style(&self) -> Style {
        self.escape.style
    }

    pub fn colors(&self) -> ColorPair {
        self.escape.colors
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RESET)?;
        self.escape.fmt(f)?;
        self.value.fmt(f)?;
        if self.reset {
            f.write_str(RESET)?;
        }
        Ok(())
    }
}

/// Attach a style and colors to any displayable value.
///
/// ```
/// use colorized::{Background, Foreground, Paint, Style};
///
/// let text = "ok".paint(Style::Bold, Foreground::Green, Background::Default);
/// assert_eq!(text.to_string(), "\x1b[0m\x1b[1;49m\x1b[1;32mok");
/// ```
pub trait Paint: fmt::Display {
    fn paint<F, B>(&self, style: Style, fg: F, bg: B) -> Painted<&Self>
    where
        (F, B): Into<ColorPair>,
    {
        Painted::new(style, (fg, bg), self)
    }
}

impl<T: fmt::Display + ?Sized> Paint for T {}
