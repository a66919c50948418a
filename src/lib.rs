//! Colorize terminal output with ANSI escape sequences.
//!
//! A colorized write emits a reset, the style and color clauses, then the
//! payload. Colors come in three representations (16 named colors, the
//! 256-color palette, 24-bit RGB); the foreground and background of one write
//! always share a representation, which the type system enforces.
//!
//! ```
//! use colorized::{write, reset, Background, Foreground, Palette, Rgb, Style};
//!
//! let mut out = Vec::new();
//! write(Style::Bold, Foreground::Red, Background::Default, &mut out, "named ").unwrap();
//! write(Style::Standard, Palette::ORANGE1, Palette::GREY0, &mut out, "palette ").unwrap();
//! write(Style::Italic, Rgb::new(255, 128, 0), Rgb::new(0, 0, 0), &mut out, "rgb").unwrap();
//! reset(&mut out).unwrap();
//! ```
//!
//! Mixing representations is a compile error:
//!
//! ```compile_fail
//! use colorized::{write, Foreground, Rgb, Style};
//!
//! let mut out = Vec::new();
//! write(Style::Bold, Foreground::Red, Rgb::new(0, 0, 0), &mut out, "x").unwrap();
//! ```

pub mod ansi;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod output;
pub mod paint;
pub mod palette;
pub mod parse;
pub mod style;

pub use color::{Background, ColorPair, ColorSpec, Foreground, Rgb};
pub use config::Config;
pub use error::{ConfigError, ParseError};
pub use escape::{prefix, push_sequence, sequence, Escape, RESET};
pub use output::{
    eprint, print, reset, reset_stderr, reset_stdout, write, write_formatted, write_pair,
    write_requests, Request,
};
pub use paint::{Paint, Painted};
pub use palette::Palette;
pub use style::Style;
