//! `colorized palette`: list the 256-color palette.

use std::env;
use std::io::{self, Write};

use anyhow::Result;

use colorized::cli::ColorWhen;
use colorized::{Palette, Style};

/// Swatches brighter than this get black text.
const LIGHT_THRESHOLD: u8 = 128;

#[cfg(not(tarpaulin_include))]
pub fn handle(color: ColorWhen) -> Result<()> {
    let no_color = env::var("NO_COLOR").ok();
    let enabled = color.enabled(atty::is(atty::Stream::Stdout), no_color.as_deref());

    let mut stdout = io::stdout().lock();
    render(&mut stdout, enabled)?;
    stdout.flush()?;
    Ok(())
}

/// One line per palette entry: a swatch with the index, then the name.
pub fn render<W: Write>(out: &mut W, enabled: bool) -> io::Result<()> {
    for entry in Palette::all() {
        let label = format!(" {:>3} ", entry.index());
        if enabled {
            let text = if entry.to_rgb().brightness() > LIGHT_THRESHOLD {
                Palette::BLACK
            } else {
                Palette::WHITE
            };
            colorized::write(Style::Standard, text, entry, out, &label)?;
            colorized::reset(out)?;
        } else {
            out.write_all(label.as_bytes())?;
        }
        writeln!(out, " {}", entry.name())?;
    }
    Ok(())
}
