//! Default action: paint the given text.

use std::env;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use colorized::cli::PaintArgs;
use colorized::{ColorPair, Config, Style};

/// How one piece of text is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintOptions {
    /// Emit escape sequences at all
    pub enabled: bool,
    /// Reset colors after the text
    pub reset: bool,
    /// End with a newline
    pub newline: bool,
}

/// Paint TEXT (or stdin) to stdout or stderr.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PaintArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let defaults = &config.defaults;

    let style = args.style.unwrap_or(defaults.style);
    let fg = args.fg.unwrap_or(defaults.fg);
    let bg = args.bg.unwrap_or(defaults.bg);
    // Validate the pair before anything is written
    let colors = ColorPair::from_specs(fg, bg)?;

    let text = if args.text.is_empty() {
        read_stdin()?
    } else {
        args.text.join(" ").into_bytes()
    };

    let stream = if args.stderr {
        atty::Stream::Stderr
    } else {
        atty::Stream::Stdout
    };
    let no_color = env::var("NO_COLOR").ok();
    let options = PaintOptions {
        enabled: args.color.enabled(atty::is(stream), no_color.as_deref()),
        reset: defaults.reset && !args.no_reset,
        newline: !args.no_newline,
    };
    tracing::debug!(?style, ?colors, ?options, "painting {} bytes", text.len());

    if args.stderr {
        let mut stderr = io::stderr().lock();
        paint_to(&mut stderr, style, colors, &text, options)?;
        stderr.flush()?;
    } else {
        let mut stdout = io::stdout().lock();
        paint_to(&mut stdout, style, colors, &text, options)?;
        stdout.flush()?;
    }
    Ok(())
}

/// Write `text` with the given style and colors according to `options`.
///
/// `text` is raw bytes so input in any encoding passes through unchanged.
pub fn paint_to<W: Write>(
    sink: &mut W,
    style: Style,
    colors: ColorPair,
    text: &[u8],
    options: PaintOptions,
) -> io::Result<()> {
    if options.enabled {
        colorized::write_pair(style, colors, sink, "")?;
        sink.write_all(text)?;
        if options.reset {
            colorized::reset(sink)?;
        }
    } else {
        sink.write_all(text)?;
    }
    if options.newline {
        sink.write_all(b"\n")?;
    }
    Ok(())
}

/// Read all of stdin, dropping the trailing line break.
fn read_stdin() -> Result<Vec<u8>> {
    let mut text = Vec::new();
    io::stdin()
        .read_to_end(&mut text)
        .context("Failed to read text from stdin")?;
    trim_line_break(&mut text);
    Ok(text)
}

fn trim_line_break(text: &mut Vec<u8>) {
    while matches!(text.last(), Some(b'\n' | b'\r')) {
        text.pop();
    }
}
