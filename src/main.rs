use anyhow::Result;
use clap::Parser;
use skillmap::cli::{Cli, Commands};
use skillmap::commands::{run_init, run_theme, run_tui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { force }) => run_init(force),
        Some(Commands::Theme { action }) => run_theme(action),
        Some(Commands::Tui) | None => run_tui(cli.content),
    }
}
