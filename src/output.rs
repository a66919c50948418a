//! Writing colorized output to a sink.
//!
//! Every write emits `RESET`, the escape clauses, then the payload. Nothing is
//! appended after the payload; call [`reset`] when the colors should end.
//!
//! Sink errors are returned unchanged. Prefix and payload are separate
//! writes with no locking between them, so callers sharing a sink across
//! threads must synchronize themselves.

use std::fmt;
use std::io::{self, Write};

use crate::color::ColorPair;
use crate::escape::{Escape, RESET};
use crate::style::Style;

/// Write `payload` to `sink` with the given style and colors.
///
/// `fg` and `bg` must be the same representation: two named colors
/// (`Foreground`, `Background`), two `Palette` entries or two `Rgb` values.
pub fn write<F, B, W, T>(style: Style, fg: F, bg: B, sink: &mut W, payload: &T) -> io::Result<()>
where
    (F, B): Into<ColorPair>,
    W: Write + ?Sized,
    T: fmt::Display + ?Sized,
{
    write_pair(style, (fg, bg).into(), sink, payload)
}

/// Like [`write`], with the colors already combined into a [`ColorPair`].
pub fn write_pair<W, T>(style: Style, colors: ColorPair, sink: &mut W, payload: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: fmt::Display + ?Sized,
{
    sink.write_all(RESET.as_bytes())?;
    write!(sink, "{}", Escape::new(style, colors))?;
    write!(sink, "{}", payload)
}

/// Write pre-formatted arguments. See [`cwrite!`](crate::cwrite).
pub fn write_formatted<F, B, W>(
    style: Style,
    fg: F,
    bg: B,
    sink: &mut W,
    args: fmt::Arguments<'_>,
) -> io::Result<()>
where
    (F, B): Into<ColorPair>,
    W: Write + ?Sized,
{
    write(style, fg, bg, sink, &args)
}

/// Write to standard output.
pub fn print<F, B, T>(style: Style, fg: F, bg: B, payload: &T) -> io::Result<()>
where
    (F, B): Into<ColorPair>,
    T: fmt::Display + ?Sized,
{
    let mut stdout = io::stdout().lock();
    write(style, fg, bg, &mut stdout, payload)?;
    stdout.flush()
}

/// Write to standard error.
pub fn eprint<F, B, T>(style: Style, fg: F, bg: B, payload: &T) -> io::Result<()>
where
    (F, B): Into<ColorPair>,
    T: fmt::Display + ?Sized,
{
    let mut stderr = io::stderr().lock();
    write(style, fg, bg, &mut stderr, payload)?;
    stderr.flush()
}

/// Write the reset sequence and nothing else.
pub fn reset<W: Write + ?Sized>(sink: &mut W) -> io::Result<()> {
    sink.write_all(RESET.as_bytes())
}

pub fn reset_stdout() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    reset(&mut stdout)?;
    stdout.flush()
}

pub fn reset_stderr() -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    reset(&mut stderr)?;
    stderr.flush()
}

/// One self-contained colorized write, for [`write_requests`].
///
/// The payload is rendered to text when the request is built.
pub struct Request<'a> {
    style: Style,
    colors: ColorPair,
    sink: &'a mut dyn Write,
    payload: String,
}

impl<'a> Request<'a> {
    pub fn new<F, B, T>(style: Style, fg: F, bg: B, sink: &'a mut dyn Write, payload: &T) -> Self
    where
        (F, B): Into<ColorPair>,
        T: fmt::Display + ?Sized,
    {
        Self {
            style,
            colors: (fg, bg).into(),
            sink,
            payload: payload.to_string(),
        }
    }

    pub fn formatted<F, B>(
        style: Style,
        fg: F,
        bg: B,
        sink: &'a mut dyn Write,
        args: fmt::Arguments<'_>,
    ) -> Self
    where
        (F, B): Into<ColorPair>,
    {
        Self::new(style, fg, bg, sink, &args)
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Perform the write.
    pub fn send(self) -> io::Result<()> {
        write_pair(self.style, self.colors, self.sink, &self.payload)
    }
}

impl fmt::Debug for Request<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("style", &self.style)
            .field("colors", &self.colors)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

/// Perform requests in order, stopping at the first sink error.
pub fn write_requests<'a, I>(requests: I) -> io::Result<()>
where
    I: IntoIterator<Item = Request<'a>>,
{
    let mut sent = 0usize;
    for request in requests {
        request.send()?;
        sent += 1;
    }
    tracing::trace!(sent, "wrote colorized requests");
    Ok(())
}

/// Colorized `write!`: format the arguments and write them to a sink.
///
/// ```
/// use colorized::{cwrite, Background, Foreground, Style};
///
/// let mut buf = Vec::new();
/// cwrite!(&mut buf, Style::Bold, Foreground::BrightBlue, Background::Default, "n = {}", 3).unwrap();
/// assert_eq!(buf, b"\x1b[0m\x1b[1;49m\x1b[1;94mn = 3");
/// ```
#[macro_export]
macro_rules! cwrite {
    ($sink:expr, $style:expr, $fg:expr, $bg:expr, $($arg:tt)*) => {
        $crate::write_formatted($style, $fg, $bg, $sink, ::std::format_args!($($arg)*))
    };
}

/// Colorized `print!` to standard output.
#[macro_export]
macro_rules! cprint {
    ($style:expr, $fg:expr, $bg:expr, $($arg:tt)*) => {
        $crate::print($style, $fg, $bg, &::std::format_args!($($arg)*))
    };
}

/// Colorized `eprint!` to standard error.
#[macro_export]
macro_rules! ceprint {
    ($style:expr, $fg:expr, $bg:expr, $($arg:tt)*) => {
        $crate::eprint($style, $fg, $bg, &::std::format_args!($($arg)*))
    };
}
