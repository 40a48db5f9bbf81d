use axum::http::StatusCode;
use axum::response::IntoResponse;
use petagenda_api::middleware::error_handling::AppError;
use petagenda_core::booking::{FieldError, FormField};
use petagenda_core::errors::AgendaError;
use rstest::rstest;

#[rstest]
#[case(AgendaError::NotFound("Appointment not found".to_string()), StatusCode::NOT_FOUND)]
#[case(AgendaError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(AgendaError::InvalidForm(Vec::new()), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(AgendaError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: AgendaError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_maps_to_server_error() {
    let response = AppError::from(eyre::eyre!("pool closed")).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_invalid_form_is_unprocessable() {
    let error = AgendaError::InvalidForm(vec![FieldError {
        field: FormField::ScheduleAt,
        message: "A data não pode ser no passado".to_string(),
    }]);

    let response = AppError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
