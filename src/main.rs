//! src/main.rs

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use gitmsg::commands::{commit, config, init, Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Commit {
            all,
            dry_run,
            overrides,
        } => commit::handle_commit(all, dry_run, &overrides).await,
        Commands::Config { overrides } => config::handle_config(&overrides).await,
        Commands::Init { force } => init::handle_init(force).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("❌ {e:#}").red());
            ExitCode::FAILURE
        }
    }
}
