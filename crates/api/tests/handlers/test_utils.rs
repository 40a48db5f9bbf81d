use std::sync::Arc;

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use petagenda_api::{build_router, ApiState};
use petagenda_core::clock::FixedClock;
use petagenda_core::config::ScheduleConfig;
use petagenda_core::models::appointment::Appointment;
use petagenda_db::mock::repositories::MockAppointmentRepo;
use uuid::Uuid;

pub fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn appointment(pet: &str, schedule_at: NaiveDateTime) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        tutor_name: "Jane Doe".to_string(),
        pet_name: pet.to_string(),
        phone: "11987654321".to_string(),
        description: "Corte de pelo".to_string(),
        schedule_at,
    }
}

pub struct TestContext {
    pub appointment_repo: MockAppointmentRepo,
    pub now: NaiveDateTime,
    pub schedule: ScheduleConfig,
}

impl TestContext {
    /// Mock repository with no expectations and the clock frozen at 2025-06-10 15:00.
    pub fn new() -> Self {
        Self {
            appointment_repo: MockAppointmentRepo::new(),
            now: at(2025, 6, 10, 15, 0),
            schedule: ScheduleConfig::default(),
        }
    }

    pub fn build_state(self) -> Arc<ApiState> {
        Arc::new(ApiState::new(
            Arc::new(self.appointment_repo),
            Arc::new(FixedClock(self.now)),
            &self.schedule,
        ))
    }

    pub fn server(self) -> TestServer {
        TestServer::new(build_router(self.build_state())).expect("Failed to build test server")
    }
}
