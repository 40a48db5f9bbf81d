use axum::http::StatusCode;
use petagenda_core::config::ScheduleConfig;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_list_slots() {
    let response = TestContext::new().server().get("/api/slots").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let slots: Vec<String> = response.json();
    assert_eq!(slots.len(), 25);
    assert_eq!(slots.first().map(String::as_str), Some("09:00"));
    assert_eq!(slots.last().map(String::as_str), Some("21:00"));
}

#[tokio::test]
async fn test_list_slots_follows_schedule_config() {
    let mut ctx = TestContext::new();
    ctx.schedule = ScheduleConfig {
        slot_start: 10,
        slot_end: 12,
        ..ScheduleConfig::default()
    };

    let slots: Vec<String> = ctx.server().get("/api/slots").await.json();

    assert_eq!(slots, vec!["10:00", "10:30", "11:00", "11:30", "12:00"]);
}

#[tokio::test]
async fn test_health_reports_slot_count() {
    let response = TestContext::new().server().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["bookable_slots"], 25);
}

#[tokio::test]
async fn test_version() {
    let body: Value = TestContext::new().server().get("/version").await.json();

    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
