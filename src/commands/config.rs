use crate::config::{resolve, ConfigStore, Overrides, StoredConfig};
use crate::errors::{Error, StoreError};
use anyhow::Context;
use colored::Colorize;

pub async fn handle_config(overrides: &Overrides) -> anyhow::Result<()> {
    let store = ConfigStore::from_env()?;
    let current = store
        .load()
        .await
        .context("failed to load configuration")?;

    if overrides.is_empty() {
        let shown = toml::to_string_pretty(&current.redacted()).map_err(StoreError::Serialize)?;
        println!("{}", store.path().display().to_string().dimmed());
        println!("{shown}");
        return Ok(());
    }

    let updated = update_config(&current, overrides)?;
    let path = store
        .save(&updated)
        .await
        .context("failed to save configuration")?;
    println!("{} {}", "✅ Configuration updated:".green(), path.display());
    Ok(())
}

/// Applies the explicit flags to a copy of the baseline and validates it.
/// The stored file is only written by the caller once this succeeds.
pub fn update_config(current: &StoredConfig, overrides: &Overrides) -> Result<StoredConfig, Error> {
    let mut updated = current.clone();
    overrides.apply_to(&mut updated);
    resolve(&Overrides::default(), &updated)?;
    Ok(updated)
}
