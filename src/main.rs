//! Taskrank - rank free-text task descriptions by inferred priority

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskrank::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASKRANK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskrank=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => cli::rank::run(args),
        Commands::Parse(args) => cli::parse::run(args),
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "taskrank", &mut std::io::stdout());
            Ok(())
        }
    }
}
