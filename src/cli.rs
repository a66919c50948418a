//! Command-line interface definitions.
//!
//! Lives in the library so the man page generator can reach it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::color::ColorSpec;
use crate::style::Style;

/// Version shown by `--version`.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("COLORIZED_BUILD_DATE"),
    ")"
);

/// Git commit of this build, `None` for release builds.
pub fn git_sha() -> Option<&'static str> {
    option_env!("VERGEN_GIT_SHA").filter(|sha| !sha.is_empty() && *sha != "unknown")
}

const AFTER_HELP: &str = "\
Color forms:
  named     red, bright-red, default
  palette   0-255, palette:196, deep-sky-blue3
  rgb       #ff8000, 255,128,0

Foreground and background must be the same form.

Examples:
  colorized -s bold -f bright-blue 'Hello world'
  colorized -f 196 -b 16 'palette colors'
  echo piped | colorized -f '#ff8000' -b '#000000'";

/// Paint text with ANSI colors and styles.
#[derive(Debug, Parser)]
#[command(
    name = "colorized",
    version = VERSION,
    about = "Paint text with ANSI colors and styles",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub paint: PaintArgs,

    /// Config file (default: <config dir>/colorized/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options for painting text (the default action).
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PaintArgs {
    /// Text to paint; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Text style: standard, bold, dim, italic, underline, blink
    #[arg(short, long)]
    pub style: Option<Style>,

    /// Foreground color
    #[arg(short, long, value_name = "COLOR")]
    pub fg: Option<ColorSpec>,

    /// Background color
    #[arg(short, long, value_name = "COLOR")]
    pub bg: Option<ColorSpec>,

    /// Do not print the trailing newline
    #[arg(short = 'n', long)]
    pub no_newline: bool,

    /// Do not reset colors after the text
    #[arg(long)]
    pub no_reset: bool,

    /// Write to stderr instead of stdout
    #[arg(short = 'e', long)]
    pub stderr: bool,

    /// When to emit escape sequences
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show all 256 palette colors with their index and name
    Palette {
        /// When to emit escape sequences
        #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
        color: ColorWhen,
    },

    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

/// When escape sequences are written.
///
/// `Auto` colors only a terminal target with `NO_COLOR` unset or empty.
/// `Always` wins over `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Decide whether to colorize, given whether the target is a terminal
    /// and the value of `NO_COLOR`.
    pub fn enabled(self, is_terminal: bool, no_color: Option<&str>) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && no_color.map_or(true, str::is_empty),
        }
    }
}
