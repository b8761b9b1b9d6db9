use crate::config::{self, AiConfig, ConfigStore, Overrides, StoredConfig};
use crate::errors::Error;
use crate::git::{GitCli, GitService};
use crate::gitmoji::add_gitmoji;
use crate::llm::{HttpProviderFactory, LLMClient, ProviderFactory};
use crate::output;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

/// What a commit invocation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Generated { message: String, command: String },
    DryRun { prompt: String, summary: String },
}

/// Entry point for `gitmsg commit`.
pub async fn handle_commit(all: bool, dry_run: bool, overrides: &Overrides) -> Result<()> {
    let baseline = ConfigStore::from_env()?
        .load()
        .await
        .context("failed to load configuration")?;
    let outcome = run_commit(
        &GitCli::new(),
        &HttpProviderFactory,
        &baseline,
        all,
        dry_run,
        overrides,
    )
    .await?;

    match outcome {
        CommitOutcome::Generated { command, .. } => output::print_generated(&command),
        CommitOutcome::DryRun { prompt, summary } => output::print_dry_run(&prompt, &summary),
    }
    Ok(())
}

/// Stage (optionally), read the diff, resolve the config, then either
/// preview the prompt or ask the provider.
pub async fn run_commit(
    git: &dyn GitService,
    factory: &dyn ProviderFactory,
    baseline: &StoredConfig,
    all: bool,
    dry_run: bool,
    overrides: &Overrides,
) -> Result<CommitOutcome, Error> {
    if all {
        git.stage_all().await.map_err(Error::Stage)?;
        println!("{}", "✅ All changes staged successfully".green());
    }

    let diff = git.staged_diff().await.map_err(Error::Diff)?;
    if diff.trim().is_empty() {
        return Err(Error::NothingStaged);
    }
    debug!("staged diff is {} bytes", diff.len());

    let cfg = config::resolve(overrides, baseline)?;

    if dry_run {
        return Ok(CommitOutcome::DryRun {
            prompt: output::dry_run_prompt(&diff, &cfg),
            summary: output::dry_run_summary(&cfg),
        });
    }

    let message = generate(factory, &diff, &cfg).await?;
    let command = output::format_git_command(&message);
    Ok(CommitOutcome::Generated { message, command })
}

/// Builds the provider for `cfg` and generates the message.
pub async fn generate(
    factory: &dyn ProviderFactory,
    diff: &str,
    cfg: &AiConfig,
) -> Result<String, Error> {
    let client = factory.create(cfg).map_err(Error::ProviderInit)?;
    generate_commit_message(client.as_ref(), diff, cfg).await
}

/// Calls the client under `cfg.timeout` and applies gitmoji when enabled.
/// A call that runs past the deadline is dropped, which cancels the request.
pub async fn generate_commit_message(
    client: &dyn LLMClient,
    diff: &str,
    cfg: &AiConfig,
) -> Result<String, Error> {
    info!("generating commit message with {}", client.name());

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Asking {} ({})...", client.name(), cfg.message.model));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = tokio::time::timeout(
        cfg.timeout,
        client.generate_commit_message(diff, &cfg.message),
    )
    .await;
    spinner.finish_and_clear();

    let message = match result {
        Ok(reply) => reply.map_err(Error::Generation)?,
        Err(_) => return Err(Error::Timeout(cfg.timeout)),
    };

    if cfg.use_gitmoji {
        Ok(add_gitmoji(&message))
    } else {
        Ok(message)
    }
}
