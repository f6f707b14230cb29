#[macro_use]
mod test_utils;

use actix_web::{http::StatusCode, test};
use portfolio_site::{build_app, errors::StoreError};
use serde_json::json;
use test_utils::*;

#[actix_rt::test]
async fn anonymous_visitor_sees_maintenance() {
    let store = InMemoryStore::with_settings(settings(true));
    let app = test::init_service(build_app(state_with(store, StaticAuth::default()), &origins())).await;

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/").to_request());
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], json!("maintenance"));
    assert_eq!(body["site_title"], json!("Cyber Security Enthusiast"));

    let (status, _) = call_json!(app, test::TestRequest::get().uri("/api/v1/projects").to_request());
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_rt::test]
async fn admin_and_login_paths_bypass_maintenance() {
    let store = InMemoryStore::with_settings(settings(true));
    let app = test::init_service(build_app(state_with(store, StaticAuth::default()), &origins())).await;

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/admin").to_request());
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["redirect_to"], json!("/login"));

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/login").to_request());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gate"]["state"], json!("unauthenticated"));
}

#[actix_rt::test]
async fn signed_in_admin_sees_normal_site() {
    let store = InMemoryStore::with_settings(settings(true));
    let app = test::init_service(build_app(state_with(store, StaticAuth::default()), &origins())).await;

    let req = test::TestRequest::get().uri("/").insert_header(bearer()).to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["maintenance_mode"], json!(true));
}

#[actix_rt::test]
async fn flag_off_serves_everyone() {
    let store = InMemoryStore::with_settings(settings(false));
    let app = test::init_service(build_app(state_with(store, StaticAuth::default()), &origins())).await;

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/").to_request());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["site_title"], json!("Cyber Security Enthusiast"));

    let req = test::TestRequest::get().uri("/").insert_header(bearer()).to_request();
    let (status, _) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn settings_are_fetched_once_per_request() {
    let mut backend = MockBackend::new();
    backend
        .expect_site_settings()
        .times(1)
        .returning(|| Ok(Some(settings(false))));
    let app = test::init_service(build_app(state_with(backend, StaticAuth::default()), &origins())).await;

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/v1/settings").to_request());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skills"], json!(["Rust", "Networking"]));
}

#[actix_rt::test]
async fn unreadable_settings_do_not_trigger_maintenance() {
    let mut backend = MockBackend::new();
    backend
        .expect_site_settings()
        .returning(|| Err(StoreError::Transport("timeout".into())));
    backend.expect_list_certificates().returning(|| Ok(vec![]));
    let app = test::init_service(build_app(state_with(backend, StaticAuth::default()), &origins())).await;

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/v1/certificates").to_request());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
