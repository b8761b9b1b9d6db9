//! gitmsg - turn a staged git diff into a commit message with an AI provider.
//!
//! # Overview
//!
//! The configuration is resolved from command-line flags, the persisted
//! `config.toml` and per-provider defaults. The staged diff is rendered into a
//! prompt, sent to an OpenAI-compatible endpoint under a timeout, optionally
//! decorated with a gitmoji, and printed as a ready-to-run `git commit`
//! command. Nothing is ever committed by the tool itself.

pub mod commands;
pub mod config;
pub mod errors;
pub mod git;
pub mod gitmoji;
pub mod llm;
pub mod output;
pub mod prompt;

pub use config::{AiConfig, MessageOptions, Overrides, ProviderKind, StoredConfig};
pub use errors::{Error, GitError, ProviderError, StoreError, ValidationError};
pub use output::format_git_command;
pub use prompt::build_commit_prompt;
