#[macro_use]
mod test_utils;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use portfolio_site::{
    build_app,
    demo::{DemoAuth, DemoBackend},
    entities::chat::{ChatTurn, Conversation, ModelRole, GREETING},
    errors::ChatError,
    use_cases::{
        chat::{ChatAdapter, CONTEXT_ACKNOWLEDGEMENT, NOT_CONFIGURED_REPLY},
        content::ContentService,
    },
    AppState,
};
use serde_json::json;
use test_utils::*;

#[actix_rt::test]
async fn missing_key_short_circuits_without_any_call() {
    let mut backend = MockBackend::new();
    backend.expect_list_projects().times(0);
    backend.expect_list_certificates().times(0);
    backend.expect_site_settings().times(0);
    let adapter = ChatAdapter::new(ContentService::new(Arc::new(backend)), None);

    let reply = adapter.send_turn("Who are you?", &[]).await;
    assert_eq!(reply, NOT_CONFIGURED_REPLY);
    assert!(!adapter.is_configured());
}

#[actix_rt::test]
async fn ai_history_is_sent_as_model_role() {
    let mut model = MockModel::new();
    model
        .expect_generate()
        .times(1)
        .withf(|turns| {
            turns.len() == 4
                && turns[0].role == ModelRole::User
                && turns[0].text.contains("Network Security Scanner")
                && turns[1].role == ModelRole::Model
                && turns[1].text == CONTEXT_ACKNOWLEDGEMENT
                && turns[2].role == ModelRole::Model
                && turns[2].text == "x"
                && turns[3].role == ModelRole::User
                && turns[3].text == "What do you build?"
        })
        .returning(|_| Ok("Mostly web apps.".to_string()));

    let adapter = ChatAdapter::new(ContentService::new(Arc::new(DemoBackend)), Some(Arc::new(model)));
    let reply = adapter.send_turn("What do you build?", &[ChatTurn::ai("x")]).await;
    assert_eq!(reply, "Mostly web apps.");
}

#[actix_rt::test]
async fn call_failure_becomes_reply_text() {
    let mut model = MockModel::new();
    model.expect_generate().returning(|_| {
        Err(ChatError::Api { status: 429, message: "Resource has been exhausted".into() })
    });

    let adapter = ChatAdapter::new(ContentService::new(Arc::new(DemoBackend)), Some(Arc::new(model)));
    let reply = adapter.send_turn("Hi", &[]).await;
    assert_eq!(reply, "Error: Resource has been exhausted (status 429). Please try again later.");
}

#[actix_rt::test]
async fn conversation_records_both_sides() {
    let mut model = MockModel::new();
    model
        .expect_generate()
        .withf(|turns| turns[2].text == GREETING && turns[2].role == ModelRole::Model)
        .returning(|_| Ok("Hello!".to_string()));
    let adapter = ChatAdapter::new(ContentService::new(Arc::new(DemoBackend)), Some(Arc::new(model)));

    let mut conversation = Conversation::default();
    let reply = adapter.send(&mut conversation, "Hey").await;

    assert_eq!(reply, "Hello!");
    assert_eq!(
        conversation.turns(),
        &[ChatTurn::ai(GREETING), ChatTurn::user("Hey"), ChatTurn::ai("Hello!")]
    );
}

#[actix_rt::test]
async fn chat_endpoint_returns_reply_and_history() {
    let app = test::init_service(build_app(state_with(DemoBackend, DemoAuth), &origins())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/chat")
        .set_json(json!({"message": "Hello", "history": [{"role": "ai", "text": "Hi!"}]}))
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], json!(NOT_CONFIGURED_REPLY));
    assert_eq!(
        body["history"],
        json!([
            {"role": "ai", "text": "Hi!"},
            {"role": "user", "text": "Hello"},
            {"role": "ai", "text": NOT_CONFIGURED_REPLY},
        ])
    );
}

#[actix_rt::test]
async fn empty_chat_message_is_rejected() {
    let mut model = MockModel::new();
    model.expect_generate().times(0);
    let state = web::Data::new(AppState::from_parts(
        Arc::new(DemoBackend),
        Arc::new(DemoAuth),
        Some(Arc::new(model)),
    ));
    let app = test::init_service(build_app(state, &origins())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/chat")
        .set_json(json!({"message": "   "}))
        .to_request();
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
