use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use zeroize::Zeroizing;

use crate::{entities::session::AccessToken, settings::AppConfig};

/// Shared HTTP plumbing for the hosted store: REST tables, storage and auth
/// all sit behind the same base URL and anonymous key.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: Zeroizing<String>,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(SupabaseClient {
            http,
            base_url: config.supabase_url.trim().trim_end_matches('/').to_string(),
            anon_key: config.anon_key(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request carrying the `apikey` header. The bearer is the caller's
    /// access token when given, otherwise the anonymous key.
    pub fn request(&self, method: Method, path: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let bearer = match token {
            Some(token) => token.as_str(),
            None => self.anon_key.as_str(),
        };
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", self.anon_key.as_str())
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer))
    }
}

/// Best-effort error text from a non-success response body.
pub async fn rejection_message(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    (status, extract_message(status, &body))
}

pub(crate) fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body.to_string()
    }
}
