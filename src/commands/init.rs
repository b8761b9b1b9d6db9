use crate::config::ConfigStore;
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_init(force: bool) -> Result<()> {
    let path = ConfigStore::from_env()?
        .init(force)
        .await
        .context("failed to create default configuration")?;
    println!("{} {}", "✅ Created default config file:".green(), path.display());
    println!("Set your API key with `gitmsg config --api-key <KEY>`.");
    Ok(())
}
