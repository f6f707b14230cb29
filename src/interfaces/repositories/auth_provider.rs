use async_trait::async_trait;

use crate::{
    entities::session::{AccessToken, Session},
    errors::AuthError,
};

/// External identity provider. Session truth always lives there.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Email and password sign-in
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Revokes the session behind `token`
    async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthError>;

    /// Looks up the session for `token`; `None` when it is unknown or expired
    async fn current_session(&self, token: &AccessToken) -> Result<Option<Session>, AuthError>;
}
