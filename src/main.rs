//! colorized - paint text with ANSI colors and styles

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use colorized::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "COLORIZED_LOG";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(
        version = colorized::cli::VERSION,
        git_sha = colorized::cli::git_sha().unwrap_or("release"),
        "starting"
    );

    match cli.command {
        Some(Commands::Palette { color }) => commands::palette::handle(color),
        Some(Commands::Config(ConfigCommands::Show)) => {
            commands::config::handle_show(cli.config.as_deref())
        }
        Some(Commands::Config(ConfigCommands::Path)) => {
            commands::config::handle_path(cli.config.as_deref())
        }
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
        None => commands::paint::handle(&cli.paint, cli.config.as_deref()),
    }
}
