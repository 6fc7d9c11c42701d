use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "brewtrack")]
#[command(about = "Discover and track new Homebrew formulas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Override the snapshot data directory (default: ~/.brewtrack)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the current formula catalog
    List {
        /// Limit the number of formulas shown
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Update the local formula snapshot with current data
    Update,

    /// Show all changes (added/removed/updated) since the last update
    Diff,

    /// Show only newly added formulas since the last update
    New {
        /// Limit the number of new formulas shown
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show details for a single formula
    Info {
        /// Formula name
        name: String,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
