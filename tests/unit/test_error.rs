use envelope_client::error::{AppError, ApplicationError, TransportError};
use reqwest::StatusCode;

#[test]
fn test_transport_error_display_status() {
    let error = TransportError::Status(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_transport_error_status_accessor() {
    let error = TransportError::Status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn test_transport_error_auth_failure_unauthorized() {
    let error = TransportError::Status(StatusCode::UNAUTHORIZED);
    assert!(error.is_auth_failure());
}

#[test]
fn test_transport_error_auth_failure_forbidden() {
    let error = TransportError::Status(StatusCode::FORBIDDEN);
    assert!(error.is_auth_failure());
}

#[test]
fn test_transport_error_auth_failure_other_status() {
    let error = TransportError::Status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!error.is_auth_failure());
}

#[test]
fn test_application_error_display_with_message() {
    let error = ApplicationError {
        code: 400,
        message: Some("bad input".to_string()),
    };
    assert_eq!(error.to_string(), "application error 400: bad input");
}

#[test]
fn test_application_error_display_without_message() {
    let error = ApplicationError {
        code: 500,
        message: None,
    };
    assert_eq!(error.to_string(), "application error 500");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("path must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: path must not be empty");
}

#[test]
fn test_app_error_display_application() {
    let error = AppError::Application(ApplicationError {
        code: 400,
        message: Some("bad input".to_string()),
    });
    assert_eq!(error.to_string(), "application error 400: bad input");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_from_transport() {
    let app_error: AppError = TransportError::Status(StatusCode::UNAUTHORIZED).into();
    assert_eq!(app_error.status(), Some(StatusCode::UNAUTHORIZED));
}

#[test]
fn test_app_error_status_absent_for_application() {
    let app_error: AppError = ApplicationError {
        code: 400,
        message: None,
    }
    .into();
    assert_eq!(app_error.status(), None);
}
