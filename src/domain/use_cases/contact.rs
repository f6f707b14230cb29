use validator::Validate;

use crate::{
    entities::message::{MessageForm, MessageReceivedResponse},
    errors::AppError,
    use_cases::content::ContentService,
};

pub struct ContactHandler {
    content: ContentService,
}

impl ContactHandler {
    pub fn new(content: ContentService) -> Self {
        ContactHandler { content }
    }

    /// Handles a visitor submission from the contact form
    pub async fn send_message(&self, request: MessageForm) -> Result<MessageReceivedResponse, AppError> {
        let request = request.trimmed();
        request.validate()?;

        let stored = self.content.send_message(&request).await?.is_some();

        Ok(MessageReceivedResponse {
            message: "Your message has been received.".to_string(),
            stored,
        })
    }
}
