//! Config subcommands handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Result};

use colorized::{Config, Palette, Style};

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = Config::load(path)?;
    let mut stdout = io::stdout().lock();
    render_show(&mut stdout, &config, atty::is(atty::Stream::Stdout))?;
    stdout.flush()?;
    Ok(())
}

/// Print the config file location and whether it exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: Option<&Path>) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()
            .ok_or_else(|| anyhow!("No config directory on this platform"))?,
    };
    let status = path_status(path.is_some(), config_path.exists());
    println!("{}{}", config_path.display(), status);
    Ok(())
}

/// Suffix for `config path`. Only the default location falls back to
/// defaults; an explicit `--config` that is missing is an error elsewhere.
fn path_status(explicit: bool, exists: bool) -> &'static str {
    match (exists, explicit) {
        (true, _) => "",
        (false, true) => " (not found)",
        (false, false) => " (not found, using defaults)",
    }
}

/// Write the config as TOML, preceded by a sample of the configured colors.
pub fn render_show<W: Write>(out: &mut W, config: &Config, colorize: bool) -> Result<()> {
    let toml_str = config.to_toml()?;

    if colorize {
        let colors = config.defaults.colors()?;
        colorized::write(Style::Dim, Palette::GREY50, Palette::GREY0, out, "# sample: ")?;
        colorized::reset(out)?;
        colorized::write_pair(config.defaults.style, colors, out, "colorized")?;
        colorized::reset(out)?;
        writeln!(out)?;
    }
    write!(out, "{}", toml_str)?;
    Ok(())
}
