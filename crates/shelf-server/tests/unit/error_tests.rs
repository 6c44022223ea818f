//! Domain error to HTTP status mapping

use rocket::http::Status;
use shelf_domain::Error;
use shelf_domain::ports::UnauthorizedReason;
use shelf_server::error::{ApiError, basic_challenge};

#[test]
fn test_not_found_maps_to_404() {
    let error = ApiError::from(Error::not_found("book 7"));
    assert_eq!(error.status(), Status::NotFound);
    assert_eq!(error.body().error, "not_found");
    assert!(error.body().message.contains("book 7"));
    assert!(error.challenge().is_none());
}

#[test]
fn test_configuration_maps_to_503() {
    let error = ApiError::from(Error::configuration("auth.username is not set"));
    assert_eq!(error.status(), Status::ServiceUnavailable);
    assert_eq!(error.body().error, "configuration_error");
}

#[test]
fn test_internal_maps_to_500() {
    let error = ApiError::from(Error::internal("binding 'repository' lock poisoned"));
    assert_eq!(error.status(), Status::InternalServerError);
    assert_eq!(error.body().error, "internal_error");
    assert!(error.challenge().is_none());
}

#[test]
fn test_unauthorized_uses_reason_code() {
    let error = ApiError::unauthorized(UnauthorizedReason::InvalidCredentials, "library");
    assert_eq!(error.status(), Status::Unauthorized);
    assert_eq!(error.body().error, "invalid_credentials");
    assert_eq!(error.challenge(), Some("Basic realm=\"library\""));
}

#[test]
fn test_basic_challenge_format() {
    assert_eq!(basic_challenge("shelf"), "Basic realm=\"shelf\"");
}
