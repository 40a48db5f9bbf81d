use axum::http::StatusCode;
use petagenda_core::models::appointment::{Appointment, AppointmentWithDetails, PeriodSection};
use petagenda_core::models::period::Period;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{appointment, at, TestContext};

fn booking(date: &str, time: &str) -> Value {
    json!({
        "tutorName": "Jane Doe",
        "petName": "Buddy",
        "phone": "11987654321",
        "description": "Banho e tosa",
        "scheduleAt": date,
        "time": time,
    })
}

#[tokio::test]
async fn test_list_appointments_groups_by_period() {
    let mut ctx = TestContext::new();
    let stored = vec![
        appointment("Buddy", at(2026, 1, 2, 10, 0)),
        appointment("Thor", at(2026, 1, 4, 12, 0)),
        appointment("Luna", at(2026, 1, 5, 13, 0)),
        appointment("Mel", at(2026, 1, 6, 11, 30)),
    ];
    let returned = stored.clone();
    ctx.appointment_repo
        .expect_list_appointments()
        .times(1)
        .returning(move || Ok(returned.clone()));

    let response = ctx.server().get("/api/appointments").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let sections: Vec<PeriodSection> = response.json();
    let pets: Vec<Vec<String>> = sections
        .iter()
        .map(|s| s.appointments.iter().map(|a| a.appointment.pet_name.clone()).collect())
        .collect();

    assert_eq!(
        sections.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
        vec!["Manhã", "Tarde", "Noite"]
    );
    assert_eq!(
        pets,
        vec![
            vec!["Buddy".to_string(), "Mel".to_string()],
            vec!["Luna".to_string()],
            // Noon has no period of its own and lands in the evening bucket.
            vec!["Thor".to_string()],
        ]
    );
}

#[tokio::test]
async fn test_list_appointments_keeps_empty_sections() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_list_appointments()
        .returning(|| Ok(Vec::new()));

    let response = ctx.server().get("/api/appointments").await;
    let sections: Vec<PeriodSection> = response.json();

    assert_eq!(sections.len(), 3);
    assert_eq!(
        sections.iter().map(|s| s.kind).collect::<Vec<_>>(),
        vec![Period::Morning, Period::Afternoon, Period::Evening]
    );
    assert!(sections.iter().all(|s| s.appointments.is_empty()));
}

#[tokio::test]
async fn test_list_appointments_database_error() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_list_appointments()
        .returning(|| Err(eyre::eyre!("connection refused")));

    let response = ctx.server().get("/api/appointments").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_get_appointment_found() {
    let mut ctx = TestContext::new();
    let stored = appointment("Buddy", at(2026, 1, 3, 14, 30));
    let id = stored.id;
    ctx.appointment_repo
        .expect_get_appointment()
        .withf(move |requested| *requested == id)
        .returning(move |_| Ok(Some(stored.clone())));

    let response = ctx.server().get(&format!("/api/appointments/{id}")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let details: AppointmentWithDetails = response.json();
    assert_eq!(details.time, "14:30");
    assert_eq!(details.period, Period::Afternoon);
    assert_eq!(details.service, "Corte de pelo");
}

#[tokio::test]
async fn test_get_appointment_not_found() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_get_appointment()
        .returning(|_| Ok(None));

    let response = ctx
        .server()
        .get(&format!("/api/appointments/{}", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_appointment_success() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    ctx.appointment_repo
        .expect_create_appointment()
        .withf(|new| new.schedule_at == at(2025, 6, 10, 20, 30) && new.pet_name == "Buddy")
        .times(1)
        .returning(move |new| {
            Ok(Appointment {
                id,
                tutor_name: new.tutor_name,
                pet_name: new.pet_name,
                phone: new.phone,
                description: new.description,
                schedule_at: new.schedule_at,
            })
        });

    let response = ctx
        .server()
        .post("/api/appointments")
        .json(&booking("2025-06-10", "20:30"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let details: AppointmentWithDetails = response.json();
    assert_eq!(details.appointment.id, id);
    assert_eq!(details.time, "20:30");
    assert_eq!(details.service, "Banho e tosa");
    assert_eq!(details.period, Period::Evening);
}

#[rstest]
#[case("2025-06-09", "10:00", "scheduleAt", "A data não pode ser no passado")]
#[case("2025-06-10", "09:00", "time", "O horário não pode ser no passado")]
#[case("2025-06-10", "15:00", "time", "O horário não pode ser no passado")]
#[case("2025-06-11", "21:30", "time", "Horário indisponível")]
#[case("2025-06-11", "", "time", "A hora é obrigatória")]
#[tokio::test]
async fn test_create_appointment_rejects_schedule(
    #[case] date: &str,
    #[case] time: &str,
    #[case] field: &str,
    #[case] message: &str,
) {
    let mut ctx = TestContext::new();
    ctx.appointment_repo.expect_create_appointment().never();

    let response = ctx
        .server()
        .post("/api/appointments")
        .json(&booking(date, time))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["fields"], json!([{ "field": field, "message": message }]));
}

#[tokio::test]
async fn test_create_appointment_reports_every_invalid_field() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo.expect_create_appointment().never();

    let mut payload = booking("2025-06-12", "10:00");
    payload["petName"] = json!("Ed");
    payload["phone"] = json!("123");

    let response = ctx.server().post("/api/appointments").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["petName", "phone"]);
}

#[tokio::test]
async fn test_create_appointment_without_date_lists_field() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo.expect_create_appointment().never();

    let mut payload = booking("2025-06-12", "10:00");
    payload.as_object_mut().unwrap().remove("scheduleAt");

    let response = ctx.server().post("/api/appointments").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(
        body["fields"],
        json!([{ "field": "scheduleAt", "message": "A data é obrigatória" }])
    );
}

#[tokio::test]
async fn test_create_appointment_past_date_without_time() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo.expect_create_appointment().never();

    let response = ctx
        .server()
        .post("/api/appointments")
        .json(&booking("2025-06-01", ""))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(
        body["fields"],
        json!([
            { "field": "scheduleAt", "message": "A data não pode ser no passado" },
            { "field": "time", "message": "A hora é obrigatória" },
        ])
    );
}

#[tokio::test]
async fn test_create_appointment_database_error() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_create_appointment()
        .returning(|_| Err(eyre::eyre!("insert failed")));

    let response = ctx
        .server()
        .post("/api/appointments")
        .json(&booking("2025-06-11", "09:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
