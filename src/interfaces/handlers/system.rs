use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: &'static str,
    store: &'static str,
    assistant: &'static str,
}

fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = chrono::Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    HealthCheckResponse {
        status: "healthy",
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        store: if state.content.is_live() { "live" } else { "demo" },
        assistant: if state.chat_adapter.is_configured() { "configured" } else { "not configured" },
    }
}

#[get("/health")]
pub async fn admin_health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(build_health_response(&state))
}
