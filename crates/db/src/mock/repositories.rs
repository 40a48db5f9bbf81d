use async_trait::async_trait;
use mockall::mock;
use petagenda_core::models::appointment::{Appointment, NewAppointment};
use uuid::Uuid;

use crate::repositories::AppointmentRepository;

// Mock repository for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepo {
        async fn list_appointments(&self) -> eyre::Result<Vec<Appointment>>;

        async fn get_appointment(&self, id: Uuid) -> eyre::Result<Option<Appointment>>;

        async fn create_appointment(&self, appointment: NewAppointment) -> eyre::Result<Appointment>;
    }
}
