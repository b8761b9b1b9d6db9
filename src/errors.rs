//! src/errors.rs
//! Error types for every stage of the commit message pipeline.
//! Messages never repeat their source; print the chain with `{:#}`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Why a resolved configuration cannot be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("provider is required")]
    MissingProvider,

    #[error("API key is required")]
    MissingApiKey,

    #[error("timeout must be positive")]
    NonPositiveTimeout,

    #[error("max length must be positive")]
    NonPositiveMaxLength,

    #[error("temperature must be between 0 and 2 (got {0})")]
    TemperatureOutOfRange(f64),
}

/// Errors from the git command line.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("failed to spawn git")]
    SpawnFailed(#[source] std::io::Error),

    #[error("`git {args}` exited with {status}: {stderr}")]
    CommandFailed {
        args: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("git produced output that is not valid UTF-8")]
    InvalidOutput(#[source] std::string::FromUtf8Error),
}

/// Errors from building or calling an AI provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unsupported provider '{0}': no endpoint URL configured")]
    UnsupportedProvider(String),

    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid proxy URL '{0}'")]
    InvalidProxy(String, #[source] reqwest::Error),

    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed")]
    Request(#[source] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("API returned no message content")]
    EmptyResponse,
}

/// Errors from reading or writing the persisted configuration.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not serialize configuration")]
    Serialize(#[source] toml::ser::Error),

    #[error("configuration file already exists at {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// Top-level errors. Each one ends the current invocation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to stage changes")]
    Stage(#[source] GitError),

    #[error("failed to get git diff")]
    Diff(#[source] GitError),

    #[error("nothing staged for commit")]
    NothingStaged,

    #[error("invalid AI configuration")]
    InvalidConfig(#[from] ValidationError),

    #[error("failed to initialize AI provider")]
    ProviderInit(#[source] ProviderError),

    #[error("failed to generate commit message")]
    Generation(#[source] ProviderError),

    #[error("failed to generate commit message: provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_names_each_cause_once() {
        let err = anyhow::Error::from(Error::Generation(ProviderError::EmptyResponse));
        assert_eq!(
            format!("{err:#}"),
            "failed to generate commit message: API returned no message content"
        );

        let err = anyhow::Error::from(Error::InvalidConfig(ValidationError::MissingApiKey));
        assert_eq!(
            format!("{err:#}"),
            "invalid AI configuration: API key is required"
        );
    }

    #[test]
    fn test_store_errors_are_transparent() {
        let path = PathBuf::from("/tmp/gitmsg/config.toml");
        let err = Error::from(StoreError::AlreadyExists(path));
        assert!(err
            .to_string()
            .starts_with("configuration file already exists at /tmp/gitmsg/config.toml"));
    }
}
