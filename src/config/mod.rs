//! src/config/mod.rs
//! The configuration that parametrizes a single provider call.

pub mod provider;
pub mod resolve;
pub mod store;

use std::time::Duration;

use crate::errors::ValidationError;

pub use provider::{ProviderDefaults, ProviderKind};
pub use resolve::{resolve, Overrides};
pub use store::{ConfigStore, StoredConfig};

/// Language used when none (or only whitespace) is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Parameters that shape the generated commit message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageOptions {
    pub model: String,
    pub language: String,
    pub commit_type: String,
    pub scope: String,
    pub custom_convention: String,
    pub max_length: u32,
    pub temperature: f64,
    pub max_redirects: u32,
}

impl MessageOptions {
    /// Trimmed, lower-cased language, `en` when empty.
    pub fn normalized_language(&self) -> String {
        let lang = self.language.trim().to_lowercase();
        if lang.is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            lang
        }
    }
}

/// Fully resolved configuration for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    pub provider: String,
    pub api_key: String,
    pub url: String,
    pub timeout: Duration,
    pub proxy: Option<String>,
    pub use_gitmoji: bool,
    pub message: MessageOptions,
}

impl AiConfig {
    /// Rejects an unusable configuration. Nothing is corrected here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider.is_empty() {
            return Err(ValidationError::MissingProvider);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        if self.timeout.is_zero() {
            return Err(ValidationError::NonPositiveTimeout);
        }
        if self.message.max_length == 0 {
            return Err(ValidationError::NonPositiveMaxLength);
        }
        // NaN fails the range check as well
        if !(0.0..=2.0).contains(&self.message.temperature) {
            return Err(ValidationError::TemperatureOutOfRange(
                self.message.temperature,
            ));
        }
        Ok(())
    }

    pub fn provider_kind(&self) -> ProviderKind {
        ProviderKind::parse(&self.provider)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_config() -> AiConfig {
        AiConfig {
            provider: "openai".to_string(),
            api_key: "sk-test".to_string(),
            url: "https://api.openai.com/v1/chat/completions".to_string(),
            timeout: Duration::from_secs(10),
            proxy: None,
            use_gitmoji: false,
            message: MessageOptions {
                model: "gpt-4o-mini".to_string(),
                language: "en".to_string(),
                commit_type: String::new(),
                scope: String::new(),
                custom_convention: String::new(),
                max_length: 200,
                temperature: 0.7,
                max_redirects: 5,
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(valid_config().validate(), Ok(()));
    }

    #[test]
    fn test_missing_provider_and_key() {
        let mut cfg = valid_config();
        cfg.provider = String::new();
        assert_eq!(cfg.validate(), Err(ValidationError::MissingProvider));

        let mut cfg = valid_config();
        cfg.api_key = String::new();
        assert_eq!(cfg.validate(), Err(ValidationError::MissingApiKey));
    }

    #[test]
    fn test_whitespace_provider_and_key_are_present() {
        let mut cfg = valid_config();
        cfg.provider = " ".to_string();
        assert_eq!(cfg.validate(), Ok(()));

        let mut cfg = valid_config();
        cfg.api_key = "  ".to_string();
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_zero_timeout_and_length_rejected() {
        let mut cfg = valid_config();
        cfg.timeout = Duration::ZERO;
        assert_eq!(cfg.validate(), Err(ValidationError::NonPositiveTimeout));

        let mut cfg = valid_config();
        cfg.message.max_length = 0;
        assert_eq!(cfg.validate(), Err(ValidationError::NonPositiveMaxLength));
    }

    #[test]
    fn test_temperature_bounds() {
        for ok in [0.0, 1.0, 2.0] {
            let mut cfg = valid_config();
            cfg.message.temperature = ok;
            assert!(cfg.validate().is_ok(), "temperature {ok} should pass");
        }
        for bad in [-0.1, 2.01, f64::NAN] {
            let mut cfg = valid_config();
            cfg.message.temperature = bad;
            assert!(matches!(
                cfg.validate(),
                Err(ValidationError::TemperatureOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_language_normalization() {
        let mut opts = valid_config().message;
        opts.language = "  FR ".to_string();
        assert_eq!(opts.normalized_language(), "fr");
        opts.language = "   ".to_string();
        assert_eq!(opts.normalized_language(), "en");
    }
}
