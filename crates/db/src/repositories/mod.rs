//! Appointment storage.
//!
//! Query functions take a pool directly, the way the rest of the crate does.
//! [`AppointmentRepository`] wraps them behind a trait so the API can be
//! driven by [`crate::mock::repositories::MockAppointmentRepo`] in tests.

pub mod appointment;

use async_trait::async_trait;
use eyre::Result;
use petagenda_core::models::appointment::{Appointment, NewAppointment};
use uuid::Uuid;

use crate::DbPool;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Every stored appointment ordered by `schedule_at`, earliest first.
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;

    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>>;

    async fn create_appointment(&self, appointment: NewAppointment) -> Result<Appointment>;
}

#[derive(Debug, Clone)]
pub struct PgAppointmentRepository {
    pool: DbPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let rows = appointment::list_appointments(&self.pool).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        let row = appointment::get_appointment_by_id(&self.pool, id).await?;
        Ok(row.map(Appointment::from))
    }

    async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment> {
        let row = appointment::create_appointment(&self.pool, &new).await?;
        Ok(row.into())
    }
}
