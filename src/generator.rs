use crate::ai::client::CompletionClient;
use crate::ai::prompts::{self, NEGATIVE_PROMPTS};
use crate::error::PromptError;
use rand::seq::SliceRandom;
use std::sync::Arc;
use uuid::Uuid;

pub const CLIENT_NOT_LOADED: &str = "API client not loaded.";
pub const NEGATIVE_ON_ERROR: &str = "Error.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPair {
    pub positive_prompt: String,
    pub negative_prompt: String,
}

impl GeneratedPair {
    fn client_not_loaded() -> Self {
        Self {
            positive_prompt: CLIENT_NOT_LOADED.to_string(),
            negative_prompt: CLIENT_NOT_LOADED.to_string(),
        }
    }

    fn failed(err: &PromptError) -> Self {
        Self {
            positive_prompt: format!("Error during generation: {err}"),
            negative_prompt: NEGATIVE_ON_ERROR.to_string(),
        }
    }
}

pub struct PromptGenerator {
    client: Option<Arc<dyn CompletionClient>>,
}

impl PromptGenerator {
    /// `None` puts the generator in disabled mode for its whole lifetime.
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    pub fn is_loaded(&self) -> bool {
        self.client.is_some()
    }

    /// Expands `idea` into a positive/negative prompt pair. Failures are
    /// reported inside the returned strings, never as an `Err`.
    pub async fn generate(&self, idea: &str) -> GeneratedPair {
        let Some(client) = &self.client else {
            log::warn!("Generation skipped: no API client configured");
            return GeneratedPair::client_not_loaded();
        };

        let request_id = Uuid::new_v4();
        log::info!("[{request_id}] Generating prompt for idea ({} chars)", idea.len());

        match self.try_generate(client.as_ref(), idea).await {
            Ok(pair) => {
                log::info!("[{request_id}] Prompt ready ({} chars)", pair.positive_prompt.len());
                pair
            }
            Err(e) => {
                log::error!("[{request_id}] Generation failed: {e}");
                GeneratedPair::failed(&e)
            }
        }
    }

    async fn try_generate(
        &self,
        client: &dyn CompletionClient,
        idea: &str,
    ) -> Result<GeneratedPair, PromptError> {
        let instruction = prompts::build_instruction(idea);
        let raw = client.complete(&instruction).await?;

        if !raw.contains(prompts::MARKER) {
            log::warn!("Response has no '{}' marker, keeping full text", prompts::MARKER);
        }
        let positive_prompt = prompts::extract_prompt(&raw).to_string();

        Ok(GeneratedPair {
            positive_prompt,
            negative_prompt: pick_negative_prompt().to_string(),
        })
    }
}

fn pick_negative_prompt() -> &'static str {
    NEGATIVE_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}
