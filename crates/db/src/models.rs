use chrono::NaiveDateTime;
use petagenda_core::models::appointment::Appointment;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub tutor_name: String,
    pub pet_name: String,
    pub phone: String,
    pub description: String,
    pub schedule_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Appointment {
            id: row.id,
            tutor_name: row.tutor_name,
            pet_name: row.pet_name,
            phone: row.phone,
            description: row.description,
            schedule_at: row.schedule_at,
        }
    }
}
