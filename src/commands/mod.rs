pub mod commit;
pub mod config;
pub mod init;

use clap::{Parser, Subcommand};

use crate::config::Overrides;

/// Generate a commit message for your staged changes with an AI provider.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a commit message from the staged diff and print the git command
    #[command(alias = "c")]
    Commit {
        /// Stage all changes first, same as `git add --all`
        #[arg(short, long)]
        all: bool,

        /// Print the prompt and effective settings without calling the provider
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Update the saved configuration, or show it when no flags are given
    Config {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Write the default configuration file
    #[command(alias = "i")]
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
