use async_trait::async_trait;

use crate::capability::LanguageModel;
use crate::error::{PipelineError, Result};

/// OpenAI-compatible chat-completions providers.
#[derive(Clone, Copy, Debug, Default)]
pub enum Provider {
    #[default]
    Grok,
    Openai,
    Gemini,
}

struct ProviderConfig {
    api_url: &'static str,
    model: &'static str,
    env_var: &'static str,
}

impl Provider {
    fn config(&self) -> ProviderConfig {
        match self {
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
                env_var: "XAI_API_KEY",
            },
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-5.1",
                env_var: "OPENAI_API_KEY",
            },
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-3-pro",
                env_var: "GEMINI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Grok => "Grok",
            Provider::Openai => "OpenAI",
            Provider::Gemini => "Gemini",
        }
    }
}

/// Summarization and QA over a chat-completions API. The API key is resolved
/// once at construction so a missing key fails at startup, not mid-request.
pub struct ChatCompletions {
    client: reqwest::Client,
    api_url: &'static str,
    model: &'static str,
    api_key: String,
}

impl ChatCompletions {
    pub fn new(provider: Provider) -> Result<Self> {
        let config = provider.config();
        let api_key =
            std::env::var(config.env_var).map_err(|_| PipelineError::MissingApiKey {
                env_var: config.env_var.to_string(),
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_url: config.api_url,
            model: config.model,
            api_key,
        })
    }

    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .post(self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    { "role": "system", "content": system_prompt },
                    { "role": "user", "content": user_prompt },
                ],
                "temperature": 0.3,
            }))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("invalid API response: {response:?}"))?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl LanguageModel for ChatCompletions {
    async fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> anyhow::Result<String> {
        let system_prompt = format!(
            "You are a text summarizer. Summarize the user's text in at most \
             {max_words} words and at least {min_words} words. Output only the \
             summary, nothing else."
        );
        self.chat(&system_prompt, text).await
    }

    async fn answer(&self, question: &str, context: &str) -> anyhow::Result<String> {
        let system_prompt = "You answer questions using only the provided context. \
                             Reply with the shortest answer, no explanation.";
        let user_prompt = format!("Context:\n{context}\n\nQuestion: {question}");
        self.chat(system_prompt, &user_prompt).await
    }
}
