//! src/config/resolve.rs
//! Layered merge: explicit flag > persisted baseline > provider default.

use std::time::Duration;

use clap::Args;
use log::{debug, warn};

use super::{AiConfig, MessageOptions, ProviderKind, StoredConfig};
use crate::errors::ValidationError;

// Per-invocation values. `None` means the flag was not given.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// AI provider (openai, grok, deepseek, or any OpenAI-compatible name)
    #[arg(long)]
    pub provider: Option<String>,

    /// API key for the provider
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// HTTP(S) proxy URL
    #[arg(long)]
    pub proxy: Option<String>,

    /// Prefix the message with a gitmoji
    #[arg(long)]
    pub emoji: bool,

    /// Never prefix the message with a gitmoji (wins over --emoji)
    #[arg(long)]
    pub no_emoji: bool,

    /// Chat completions endpoint URL
    #[arg(long)]
    pub url: Option<String>,

    /// Model name
    #[arg(long)]
    pub model: Option<String>,

    /// Language of the commit message (e.g. en, fr, zh)
    #[arg(long = "lang")]
    pub language: Option<String>,

    /// Force a commit type (feat, fix, ...)
    #[arg(long)]
    pub commit_type: Option<String>,

    /// Force a commit scope
    #[arg(long)]
    pub scope: Option<String>,

    /// Custom commit convention to follow instead of Conventional Commits
    #[arg(long)]
    pub custom_convention: Option<String>,

    /// Maximum message length passed to the model
    #[arg(long)]
    pub max_length: Option<u32>,

    /// Sampling temperature (0 to 2)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Maximum number of HTTP redirects to follow
    #[arg(long)]
    pub max_redirects: Option<u32>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        *self == Overrides::default()
    }

    /// `--no-emoji` beats `--emoji`; neither keeps the current value.
    pub fn gitmoji(&self, current: bool) -> bool {
        if self.no_emoji {
            false
        } else if self.emoji {
            true
        } else {
            current
        }
    }

    /// A zero timeout counts as absent, so zero can never be chosen explicitly.
    fn timeout_secs(&self) -> Option<u64> {
        match self.timeout {
            Some(0) => {
                warn!("--timeout 0 is ignored; using the configured timeout");
                None
            }
            other => other,
        }
    }

    /// Writes every explicit value into the persisted baseline.
    pub fn apply_to(&self, cfg: &mut StoredConfig) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut cfg.provider, &self.provider);
        set(&mut cfg.api_key, &self.api_key);
        set(&mut cfg.timeout, &self.timeout_secs());
        set(&mut cfg.proxy, &self.proxy);
        set(&mut cfg.url, &self.url);
        set(&mut cfg.model, &self.model);
        set(&mut cfg.language, &self.language);
        set(&mut cfg.commit_type, &self.commit_type);
        set(&mut cfg.scope, &self.scope);
        set(&mut cfg.custom_convention, &self.custom_convention);
        set(&mut cfg.max_length, &self.max_length);
        set(&mut cfg.temperature, &self.temperature);
        set(&mut cfg.max_redirects, &self.max_redirects);
        cfg.use_gitmoji = self.gitmoji(cfg.use_gitmoji);
    }
}

fn pick(explicit: &Option<String>, baseline: &str) -> String {
    explicit.clone().unwrap_or_else(|| baseline.to_string())
}

/// Merges the overrides over the baseline, fills provider defaults for an
/// empty model or URL, then validates.
pub fn resolve(
    overrides: &Overrides,
    baseline: &StoredConfig,
) -> Result<AiConfig, ValidationError> {
    let provider = pick(&overrides.provider, &baseline.provider);
    let defaults = ProviderKind::parse(&provider).defaults();

    let mut model = pick(&overrides.model, &baseline.model);
    let mut url = pick(&overrides.url, &baseline.url);
    if let Some(defaults) = defaults {
        if model.is_empty() {
            model = defaults.model.to_string();
        }
        if url.is_empty() {
            url = defaults.url.to_string();
        }
    }

    let timeout_secs = overrides.timeout_secs().unwrap_or(baseline.timeout);
    let proxy = pick(&overrides.proxy, &baseline.proxy);

    let config = AiConfig {
        provider,
        api_key: pick(&overrides.api_key, &baseline.api_key),
        url,
        timeout: Duration::from_secs(timeout_secs),
        proxy: (!proxy.trim().is_empty()).then_some(proxy),
        use_gitmoji: overrides.gitmoji(baseline.use_gitmoji),
        message: MessageOptions {
            model,
            language: pick(&overrides.language, &baseline.language),
            commit_type: pick(&overrides.commit_type, &baseline.commit_type),
            scope: pick(&overrides.scope, &baseline.scope),
            custom_convention: pick(&overrides.custom_convention, &baseline.custom_convention),
            max_length: overrides.max_length.unwrap_or(baseline.max_length),
            temperature: overrides.temperature.unwrap_or(baseline.temperature),
            max_redirects: overrides.max_redirects.unwrap_or(baseline.max_redirects),
        },
    };

    config.validate()?;
    debug!(
        "resolved provider={} model={} url={} timeout={:?}",
        config.provider, config.message.model, config.url, config.timeout
    );
    Ok(config)
}
