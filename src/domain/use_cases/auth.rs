use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use crate::{
    entities::session::{AccessToken, LoginForm, Session, SessionSummary},
    errors::AuthError,
    repositories::auth_provider::AuthProvider,
};

/// Lifecycle of a session check.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

/// What a protected view should do in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateView {
    Placeholder,
    Protected,
    RedirectToLogin,
}

impl AuthState {
    pub fn view(&self) -> GateView {
        match self {
            AuthState::Loading => GateView::Placeholder,
            AuthState::Authenticated(_) => GateView::Protected,
            AuthState::Unauthenticated => GateView::RedirectToLogin,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, AuthState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthState::Loading => "loading",
            AuthState::Authenticated(_) => "authenticated",
            AuthState::Unauthenticated => "unauthenticated",
        }
    }
}

/// Session gate for the dashboard. Starts in `Loading` and reaches exactly
/// one terminal state once the provider has answered.
pub struct AuthGate {
    provider: Arc<dyn AuthProvider>,
    state: AuthState,
}

impl AuthGate {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        AuthGate { provider, state: AuthState::Loading }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Asks the provider for the session behind `token`. Provider failures
    /// resolve to `Unauthenticated`.
    pub async fn resolve(&mut self, token: Option<&AccessToken>) -> &AuthState {
        if self.state.is_terminal() {
            return &self.state;
        }
        let session = match token {
            Some(token) => self.provider.current_session(token).await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Session lookup failed");
                None
            }),
            None => None,
        };
        self.state = match session {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Unauthenticated,
        };
        &self.state
    }

    /// Destroys the session at the provider and always ends `Unauthenticated`.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        let previous = std::mem::replace(&mut self.state, AuthState::Unauthenticated);
        match previous {
            AuthState::Authenticated(session) => self.provider.sign_out(&session.access_token).await,
            _ => Ok(()),
        }
    }

    pub fn into_state(self) -> AuthState {
        self.state
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: AccessToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub session: SessionSummary,
    pub redirect_to: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GateStatus {
    pub state: &'static str,
    pub view: GateView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionSummary>,
}

impl From<&AuthState> for GateStatus {
    fn from(state: &AuthState) -> Self {
        GateStatus {
            state: state.label(),
            view: state.view(),
            session: state.session().map(Session::summary),
        }
    }
}

#[derive(Clone)]
pub struct AuthHandler {
    provider: Arc<dyn AuthProvider>,
}

impl AuthHandler {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        AuthHandler { provider }
    }

    pub fn gate(&self) -> AuthGate {
        AuthGate::new(self.provider.clone())
    }

    /// Resolves a fresh gate for `token`.
    pub async fn resolve(&self, token: Option<&AccessToken>) -> AuthState {
        let mut gate = self.gate();
        gate.resolve(token).await;
        gate.into_state()
    }

    /// Signs in with email and password after validating the form
    pub async fn login(&self, request: LoginForm, redirect_to: &'static str) -> Result<LoginResponse, AuthError> {
        request.validate()?;

        let session = self.provider.sign_in(request.email.trim(), &request.password).await?;
        tracing::info!(user_id = %session.user.id, "Admin signed in");

        Ok(LoginResponse {
            session: session.summary(),
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: session.token_type,
            redirect_to,
        })
    }

    pub async fn logout(&self, session: Session) -> Result<(), AuthError> {
        let mut gate = AuthGate {
            provider: self.provider.clone(),
            state: AuthState::Authenticated(session),
        };
        gate.logout().await?;
        tracing::info!("Admin signed out");
        Ok(())
    }
}
