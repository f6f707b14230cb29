use async_trait::async_trait;

use crate::{entities::chat::ModelTurn, errors::ChatError};

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Sends the ordered conversation and returns the model's next reply.
    async fn generate(&self, turns: &[ModelTurn]) -> Result<String, ChatError>;
}
