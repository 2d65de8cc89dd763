use crate::config::AppConfig;
use crate::error::PromptError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 256;

/// A chat-completion backend that turns one user instruction into raw text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, instruction: &str) -> Result<String, PromptError>;
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl<'a> ChatRequest<'a> {
    pub fn single_user(model: &'a str, content: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage { role: "user", content }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenRouterClient {
    /// Builds the transport once. No timeout is set: a request waits for the
    /// remote side or a transport error.
    pub fn new(config: &AppConfig) -> Result<Self, PromptError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, instruction: &str) -> Result<String, PromptError> {
        let payload = ChatRequest::single_user(&self.model, instruction);

        let res = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("API Error: {}", err_text);
            return Err(PromptError::GenerationFailed(format!(
                "API Error {status}: {}",
                error_message(&err_text)
            )));
        }

        let body = res.text().await?;
        parse_completion(&body)
    }
}

/// Pulls the first choice's content out of a chat-completion body.
pub fn parse_completion(body: &str) -> Result<String, PromptError> {
    let response: ChatResponse = serde_json::from_str(body)?;

    if let Some(err) = response.error {
        let msg = err.message.unwrap_or_else(|| "Unknown error".to_string());
        return Err(PromptError::GenerationFailed(msg));
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(PromptError::EmptyResponse("no choices returned"))?;

    choice
        .message
        .content
        .ok_or(PromptError::EmptyResponse("no message content"))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
