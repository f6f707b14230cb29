use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::chat::{ChatRequest, ChatResponse, Conversation},
    errors::AppError,
    AppState,
};

/// One chat turn. The client owns the history and sends it back each time.
#[instrument(skip(state, request))]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<impl Responder, AppError> {
    let request = request.into_inner();
    if request.message.trim().is_empty() {
        return Err(AppError::InvalidInput("Message cannot be empty".to_string()));
    }
    request.validate()?;

    let mut conversation = Conversation::from_turns(request.history);
    let reply = state.chat_adapter.send(&mut conversation, request.message.trim()).await;

    Ok(HttpResponse::Ok().json(ChatResponse {
        reply,
        history: conversation.into_turns(),
    }))
}
