//! CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::{parse::ParseArgs, rank::RankArgs};

#[derive(Parser)]
#[command(
    name = "taskrank",
    version,
    about = "Rank free-text task descriptions by inferred deadline, effort, and importance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank tasks read from a file or stdin, one per line
    Rank(RankArgs),

    /// Show the extraction and score for a single task
    Parse(ParseArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
