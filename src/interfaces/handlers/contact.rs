use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::message::MessageForm, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn send_message(
    state: web::Data<AppState>,
    form: web::Json<MessageForm>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler.send_message(form.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
