use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::Deserialize;

use crate::{
    entities::session::{AccessToken, Session, SessionUser},
    errors::AuthError,
    infrastructure::supabase::client::{rejection_message, SupabaseClient},
    repositories::auth_provider::AuthProvider,
};

#[derive(Clone)]
pub struct SupabaseAuth {
    client: SupabaseClient,
}

impl SupabaseAuth {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseAuth { client }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default = "bearer")]
    token_type: String,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    expires_in: Option<i64>,
    user: SessionUser,
}

fn bearer() -> String {
    "bearer".to_string()
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| self.expires_in.map(|secs| now + chrono::Duration::seconds(secs)));
        Session {
            access_token: AccessToken::new(self.access_token),
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            expires_at,
            user: self.user,
        }
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .client
            .request(Method::POST, "auth/v1/token", None)
            .query(&[("grant_type", "password")])
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let token: TokenResponse = response
                    .json()
                    .await
                    .map_err(|e| AuthError::Provider(e.to_string()))?;
                Ok(token.into_session(Utc::now()))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                let (_, message) = rejection_message(response).await;
                Err(AuthError::WrongCredentials(message))
            }
            _ => {
                let (status, message) = rejection_message(response).await;
                Err(AuthError::Provider(format!("{} ({})", message, status.as_u16())))
            }
        }
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthError> {
        let response = self
            .client
            .request(Method::POST, "auth/v1/logout", Some(token))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // already gone at the provider
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(()),
            _ => {
                let (status, message) = rejection_message(response).await;
                Err(AuthError::Provider(format!("{} ({})", message, status.as_u16())))
            }
        }
    }

    async fn current_session(&self, token: &AccessToken) -> Result<Option<Session>, AuthError> {
        let response = self
            .client
            .request(Method::GET, "auth/v1/user", Some(token))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let user: SessionUser = response
                    .json()
                    .await
                    .map_err(|e| AuthError::Provider(e.to_string()))?;
                Ok(Some(Session {
                    access_token: token.clone(),
                    refresh_token: None,
                    token_type: bearer(),
                    expires_at: None,
                    user,
                }))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => {
                let (status, message) = rejection_message(response).await;
                Err(AuthError::Provider(format!("{} ({})", message, status.as_u16())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_prefers_absolute_expiry() {
        let now = Utc::now();
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "refresh_token": "def",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1_900_000_000,
            "user": {"id": "u-1", "email": "admin@example.com"}
        }))
        .unwrap();
        let session = token.into_session(now);
        assert_eq!(session.expires_at.map(|t| t.timestamp()), Some(1_900_000_000));
        assert_eq!(session.access_token.as_str(), "abc");
    }

    #[test]
    fn relative_expiry_is_resolved_from_now() {
        let now = Utc::now();
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "expires_in": 60,
            "user": {"id": "u-1"}
        }))
        .unwrap();
        let session = token.into_session(now);
        assert_eq!(session.expires_at, Some(now + chrono::Duration::seconds(60)));
        assert_eq!(session.token_type, "bearer");
    }
}
