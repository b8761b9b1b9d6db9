//! src/llm/openai.rs
use super::LLMClient;
use crate::config::MessageOptions;
use crate::errors::ProviderError;
use crate::prompt::build_commit_prompt;
use log::debug;
use reqwest::{redirect, Client, Url};
use serde::{Deserialize, Serialize};

// --- request/response bodies (OpenAI chat completions) ---
#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

const USER_AGENT: &str = concat!("gitmsg/", env!("CARGO_PKG_VERSION"));

// --- client ---
/// Client for any endpoint that speaks the OpenAI chat completions API
/// (OpenAI, Grok, DeepSeek, local gateways).
pub struct OpenAICompatibleClient {
    provider: String,
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl OpenAICompatibleClient {
    pub fn new(
        api_key: &str,
        proxy: Option<&str>,
        url: &str,
        provider: &str,
        max_redirects: u32,
    ) -> Result<Self, ProviderError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ProviderError::UnsupportedProvider(provider.to_string()));
        }
        let endpoint = Url::parse(url).map_err(|e| ProviderError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ProviderError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::limited(max_redirects as usize));
        if let Some(proxy_url) = proxy.map(str::trim).filter(|p| !p.is_empty()) {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| ProviderError::InvalidProxy(proxy_url.to_string(), e))?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().map_err(ProviderError::ClientBuild)?;

        Ok(Self {
            provider: provider.to_string(),
            api_key: api_key.to_string(),
            endpoint,
            client,
        })
    }
}

/// Drops a surrounding ``` fence some models add despite the instructions.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };
    // skip an info string such as ```text
    match inner.find('\n') {
        Some(newline) => inner[newline + 1..].trim(),
        None => inner.trim(),
    }
}

#[async_trait::async_trait]
impl LLMClient for OpenAICompatibleClient {
    fn name(&self) -> &str {
        &self.provider
    }

    async fn generate_commit_message(
        &self,
        diff: &str,
        opts: &MessageOptions,
    ) -> Result<String, ProviderError> {
        let prompt = build_commit_prompt(diff, opts);
        let request_payload = OpenAIRequest {
            model: &opts.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: opts.temperature,
            max_tokens: opts.max_length,
        };

        debug!("POST {} (model {})", self.endpoint, opts.model);
        let res = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request_payload)
            .send()
            .await
            .map_err(ProviderError::Request)?;

        let res_status = res.status();
        debug!("{} answered {}", self.provider, res_status);

        if !res_status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: res_status,
                body,
            });
        }

        let response = res
            .json::<OpenAIResponse>()
            .await
            .map_err(ProviderError::Request)?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        let message = strip_code_fence(&content);
        if message.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::valid_config;

    fn chat_body(content: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    fn client_for(url: &str) -> OpenAICompatibleClient {
        OpenAICompatibleClient::new("test-key", None, url, "openai", 5).unwrap()
    }

    #[test]
    fn test_empty_url_is_unsupported_provider() {
        let err = OpenAICompatibleClient::new("k", None, "", "mystery", 5).err().unwrap();
        assert!(matches!(err, ProviderError::UnsupportedProvider(name) if name == "mystery"));
    }

    #[test]
    fn test_invalid_url_and_scheme_rejected() {
        assert!(matches!(
            OpenAICompatibleClient::new("k", None, "not a url", "openai", 5),
            Err(ProviderError::InvalidUrl { .. })
        ));
        assert!(matches!(
            OpenAICompatibleClient::new("k", None, "ftp://example.com/v1", "openai", 5),
            Err(ProviderError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("  feat: x  "), "feat: x");
        assert_eq!(strip_code_fence("```\nfeat: x\n```"), "feat: x");
        assert_eq!(strip_code_fence("```text\nfix: y\n\nbody\n```"), "fix: y\n\nbody");
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_returns_message() {
        let mut server = mockito::Server::new_async().await;
        let opts = valid_config().message;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 200
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(chat_body("feat: add parser\n\nSupport nested tables."))
            .create_async()
            .await;

        let client = client_for(&format!("{}/v1/chat/completions", server.url()));
        let msg = client.generate_commit_message("+a", &opts).await.unwrap();
        assert_eq!(msg, "feat: add parser\n\nSupport nested tables.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let client = client_for(&format!("{}/chat", server.url()));
        let err = client
            .generate_commit_message("+a", &valid_config().message)
            .await
            .unwrap_err();
        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status.as_u16(), 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/chat", server.url()));
        let err = client
            .generate_commit_message("+a", &valid_config().message)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }
}
