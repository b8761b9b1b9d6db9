//! src/git.rs

use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use crate::errors::GitError;

/// The two git operations the commit pipeline needs.
#[async_trait]
pub trait GitService: Send + Sync {
    /// Stages every change in the working tree.
    async fn stage_all(&self) -> Result<(), GitError>;

    /// Unified diff of the index against HEAD. Empty when nothing is staged.
    async fn staged_diff(&self) -> Result<String, GitError>;
}

/// Runs the `git` executable, optionally in a given directory.
#[derive(Debug, Default, Clone)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }

    pub async fn run_git_command(&self, args: &[&str]) -> Result<String, GitError> {
        let git = which::which("git").map_err(|_| GitError::NotInstalled)?;
        debug!("git {}", args.join(" "));

        let mut cmd = Command::new(git);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        let output = cmd.output().await.map_err(GitError::SpawnFailed)?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(GitError::InvalidOutput)
        } else {
            Err(GitError::CommandFailed {
                args: args.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl GitService for GitCli {
    async fn stage_all(&self) -> Result<(), GitError> {
        self.run_git_command(&["add", "--all"]).await.map(|_| ())
    }

    async fn staged_diff(&self) -> Result<String, GitError> {
        self.run_git_command(&["diff", "--staged"]).await
    }
}
