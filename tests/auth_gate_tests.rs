mod test_utils;

use std::sync::Arc;

use mockall::predicate::*;
use portfolio_site::{
    entities::session::AccessToken,
    errors::AuthError,
    use_cases::auth::{AuthGate, AuthState, GateView},
};
use test_utils::*;

#[actix_rt::test]
async fn loading_never_renders_protected_content() {
    let gate = AuthGate::new(Arc::new(MockAuth::new()));
    assert_eq!(gate.state(), &AuthState::Loading);
    assert_eq!(gate.state().view(), GateView::Placeholder);
    assert!(gate.state().session().is_none());
}

#[actix_rt::test]
async fn session_present_reaches_authenticated_once() {
    let mut auth = MockAuth::new();
    auth.expect_current_session()
        .with(eq(AccessToken::new(ADMIN_TOKEN)))
        .times(1)
        .returning(|_| Ok(Some(admin_session())));
    let mut gate = AuthGate::new(Arc::new(auth));
    let token = AccessToken::new(ADMIN_TOKEN);

    let state = gate.resolve(Some(&token)).await.clone();
    assert_eq!(state, AuthState::Authenticated(admin_session()));
    assert_eq!(state.view(), GateView::Protected);

    // terminal states are sticky
    let again = gate.resolve(None).await;
    assert_eq!(again.view(), GateView::Protected);
}

#[actix_rt::test]
async fn missing_token_skips_the_provider() {
    let mut auth = MockAuth::new();
    auth.expect_current_session().times(0);
    let mut gate = AuthGate::new(Arc::new(auth));

    assert_eq!(gate.resolve(None).await, &AuthState::Unauthenticated);
    assert_eq!(gate.state().view(), GateView::RedirectToLogin);
}

#[actix_rt::test]
async fn provider_failure_resolves_unauthenticated() {
    let mut auth = MockAuth::new();
    auth.expect_current_session()
        .returning(|_| Err(AuthError::Provider("upstream unavailable".into())));
    let mut gate = AuthGate::new(Arc::new(auth));

    let token = AccessToken::new("whatever");
    assert_eq!(gate.resolve(Some(&token)).await, &AuthState::Unauthenticated);
}

#[actix_rt::test]
async fn logout_destroys_session_and_forces_unauthenticated() {
    let mut auth = MockAuth::new();
    auth.expect_current_session().returning(|_| Ok(Some(admin_session())));
    auth.expect_sign_out()
        .times(1)
        .returning(|_| Err(AuthError::Provider("network down".into())));
    let mut gate = AuthGate::new(Arc::new(auth));
    let token = AccessToken::new(ADMIN_TOKEN);
    gate.resolve(Some(&token)).await;

    assert!(gate.logout().await.is_err());
    assert_eq!(gate.state(), &AuthState::Unauthenticated);
}
