//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillmap")]
#[command(author, version, about = "Terminal browser for the LearnAI roadmap")]
pub struct Cli {
    /// Path to a catalog JSON file (default: built-in roadmap)
    #[arg(long)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the roadmap (default when no subcommand is given)
    Tui,
    /// Inspect or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Create a default .skillmap.toml in the current directory
    Init {
        /// Force overwrite an existing preferences file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the stored theme mode
    Get,
    /// Store a theme mode: light or dark
    Set { mode: String },
    /// Flip the stored theme mode
    Toggle,
}
