//! src/config/provider.rs
//! Known provider tokens and their built-in model/endpoint defaults.

use std::fmt;

/// Built-in model and endpoint for a known provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDefaults {
    pub model: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Grok,
    DeepSeek,
    /// Any other OpenAI-compatible endpoint; model and URL must come from config.
    Other(String),
}

impl ProviderKind {
    /// Exact, case-sensitive match on the three built-in tokens.
    pub fn parse(token: &str) -> Self {
        match token {
            "openai" => ProviderKind::OpenAi,
            "grok" => ProviderKind::Grok,
            "deepseek" => ProviderKind::DeepSeek,
            _ => ProviderKind::Other(token.to_string()),
        }
    }

    /// `None` for `Other`: the caller keeps the baseline values.
    pub fn defaults(&self) -> Option<ProviderDefaults> {
        match self {
            ProviderKind::OpenAi => Some(ProviderDefaults {
                model: "gpt-4o-mini",
                url: "https://api.openai.com/v1/chat/completions",
            }),
            ProviderKind::Grok => Some(ProviderDefaults {
                model: "grok-3",
                url: "https://api.x.ai/v1/chat/completions",
            }),
            ProviderKind::DeepSeek => Some(ProviderDefaults {
                model: "deepseek-rag",
                url: "https://api.deepseek.com/v1/chat/completions",
            }),
            ProviderKind::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Grok => "grok",
            ProviderKind::DeepSeek => "deepseek",
            ProviderKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(ProviderKind::parse("openai"), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::parse("grok"), ProviderKind::Grok);
        assert_eq!(ProviderKind::parse("deepseek"), ProviderKind::DeepSeek);
        assert_eq!(
            ProviderKind::parse("ollama"),
            ProviderKind::Other("ollama".to_string())
        );
    }

    #[test]
    fn test_parse_is_case_and_space_sensitive() {
        assert_eq!(
            ProviderKind::parse("Grok"),
            ProviderKind::Other("Grok".to_string())
        );
        assert_eq!(
            ProviderKind::parse(" openai "),
            ProviderKind::Other(" openai ".to_string())
        );
        assert_eq!(
            ProviderKind::parse("DEEPSEEK"),
            ProviderKind::Other("DEEPSEEK".to_string())
        );
    }

    #[test]
    fn test_defaults_only_for_named_providers() {
        assert_eq!(ProviderKind::OpenAi.defaults().unwrap().model, "gpt-4o-mini");
        assert_eq!(
            ProviderKind::Grok.defaults().unwrap().url,
            "https://api.x.ai/v1/chat/completions"
        );
        assert_eq!(ProviderKind::DeepSeek.defaults().unwrap().model, "deepseek-rag");
        assert!(ProviderKind::Other("local".into()).defaults().is_none());
    }
}
