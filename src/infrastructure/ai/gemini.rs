use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::{
    entities::chat::{ModelRole, ModelTurn},
    errors::ChatError,
    infrastructure::supabase::client::extract_message,
    repositories::language_model::LanguageModel,
    settings::AppConfig,
};

/// Client for the `generateContent` endpoint of the Gemini API.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: Zeroizing<String>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    role: ModelRole,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(GeminiClient {
            http,
            base_url: config.gemini_base_url.trim().trim_end_matches('/').to_string(),
            model: config.gemini_model.trim().to_string(),
            api_key: config.gemini_key(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

fn request_body(turns: &[ModelTurn]) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: turns
            .iter()
            .map(|turn| Content { role: turn.role, parts: [Part { text: &turn.text }] })
            .collect(),
    }
}

fn reply_text(response: GenerateResponse) -> Result<String, ChatError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text);
    }
    match response.prompt_feedback.and_then(|f| f.block_reason) {
        Some(reason) => Err(ChatError::Blocked(reason)),
        None => Err(ChatError::EmptyReply),
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, turns: &[ModelTurn]) -> Result<String, ChatError> {
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body(turns))
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").cloned())
                .map(|err| extract_message(status, &err.to_string()))
                .unwrap_or_else(|| extract_message(status, &body));
            return Err(ChatError::Api { status: status.as_u16(), message });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Transport(e.without_url().to_string()))?;
        reply_text(parsed)
    }
}
