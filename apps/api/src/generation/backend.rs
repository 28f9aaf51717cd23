//! Story backend — the seam between the generator and the LLM client.
//!
//! `StoryGenerator` holds `Option<Arc<dyn StoryBackend>>`: `None` means no
//! credential is configured and templates are served directly. Tests swap in
//! canned or failing backends instead of a network.

use async_trait::async_trait;

use crate::generation::prompts::STORY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// A backend capable of turning a story prompt into prose.
#[async_trait]
pub trait StoryBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl StoryBackend for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, STORY_SYSTEM).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.to_string())
    }
}
