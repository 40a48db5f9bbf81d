use crate::models::DbAppointment;
use chrono::Local;
use eyre::Result;
use petagenda_core::models::appointment::NewAppointment;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Local::now().naive_local();

    tracing::debug!(
        "Creating appointment: id={}, pet={}, schedule_at={}",
        id, appointment.pet_name, appointment.schedule_at
    );

    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (id, tutor_name, pet_name, phone, description, schedule_at, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, tutor_name, pet_name, phone, description, schedule_at, created_at
        "#,
    )
    .bind(id)
    .bind(&appointment.tutor_name)
    .bind(&appointment.pet_name)
    .bind(&appointment.phone)
    .bind(&appointment.description)
    .bind(appointment.schedule_at)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// All appointments, earliest first. Ties keep insertion order.
pub async fn list_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointment>> {
    let rows = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, tutor_name, pet_name, phone, description, schedule_at, created_at
        FROM appointments
        ORDER BY schedule_at ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Loaded {} appointments", rows.len());
    Ok(rows)
}

pub async fn get_appointment_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbAppointment>> {
    let row = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, tutor_name, pet_name, phone, description, schedule_at, created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
