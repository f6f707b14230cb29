use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use zeroize::Zeroize;

/// Opaque bearer token issued by the auth provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authentication proof owned by the provider. Nothing here is persisted.
#[derive(Clone, PartialEq, Serialize)]
pub struct Session {
    pub access_token: AccessToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: SessionUser,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            user: self.user.clone(),
            expires_at: self.expires_at,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// Session view without tokens, for status endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub user: SessionUser,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            access_token: AccessToken::new("secret-token"),
            refresh_token: Some("refresh".into()),
            token_type: "bearer".into(),
            expires_at,
            user: SessionUser { id: "u-1".into(), email: Some("admin@example.com".into()) },
        }
    }

    #[test]
    fn debug_never_prints_tokens() {
        let printed = format!("{:?}", session(None));
        assert!(!printed.contains("secret-token"));
        assert!(!printed.contains("\"refresh\""));
    }

    #[test]
    fn expiry_is_checked_against_now() {
        let now = Utc::now();
        assert!(session(Some(now - Duration::seconds(1))).is_expired(now));
        assert!(!session(Some(now + Duration::minutes(5))).is_expired(now));
        assert!(!session(None).is_expired(now));
    }
}
