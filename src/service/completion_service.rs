use async_trait::async_trait;

use crate::clients::openrouter_client;
use crate::models::message::Message;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        transcript: &[Message],
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

pub struct OpenRouterService {
    api_key: String,
}

impl OpenRouterService {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl CompletionClient for OpenRouterService {
    async fn complete(
        &self,
        transcript: &[Message],
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        openrouter_client::send_chat(transcript, &self.api_key).await
    }
}
