//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "steam-junk")]
#[command(about = "Normalize SteamDB chart dumps and game tags into CSV tables", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input/output directory overrides shared by the batch commands.
#[derive(Args, Clone)]
pub(crate) struct DirArgs {
    /// Input directory (overrides env var and settings file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (overrides env var and settings file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert chart text dumps (<year>.txt) into record tables (<year>.csv)
    Charts {
        #[command(flatten)]
        dirs: DirArgs,
    },

    /// Build the tag dictionary (tags.csv) and game/tag junction (game_tag.csv)
    Tags {
        #[command(flatten)]
        dirs: DirArgs,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show every resolved directory and where it came from
    Show,

    /// Print the settings file path
    Path,
}
