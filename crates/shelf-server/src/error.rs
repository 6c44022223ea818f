//! HTTP error mapping
//!
//! Every failure leaves the server as a JSON body of the form
//! `{"error": "<code>", "message": "<text>"}`. Domain errors are mapped to
//! status codes here; the catchers cover failures raised by Rocket itself
//! (unknown routes, unreadable bodies, failed request guards).

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use rocket::{Catcher, catch, catchers};
use serde::Serialize;
use shelf_domain::Error;
use shelf_domain::ports::UnauthorizedReason;
use std::sync::Arc;

use shelf_infrastructure::constants::DEFAULT_AUTH_REALM;
use shelf_infrastructure::di::AppContext;

use crate::auth::AuthFailure;
use crate::constants::{BASIC_SCHEME, WWW_AUTHENTICATE_HEADER};

/// JSON error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: &'static str,
    /// Human-readable description
    pub message: String,
}

/// Error returned by handlers and catchers
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    body: ErrorResponse,
    challenge: Option<String>,
}

/// Result alias for route handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error with an explicit status and code
    pub fn new(status: Status, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error,
                message: message.into(),
            },
            challenge: None,
        }
    }

    /// 401 carrying a Basic challenge for `realm`
    pub fn unauthorized(reason: UnauthorizedReason, realm: &str) -> Self {
        Self {
            challenge: Some(basic_challenge(realm)),
            ..Self::new(Status::Unauthorized, reason.code(), reason.to_string())
        }
    }

    /// 503 raised when credentials are not configured
    pub fn auth_not_configured(message: impl Into<String>) -> Self {
        Self::new(Status::ServiceUnavailable, "auth_not_configured", message)
    }

    /// HTTP status of this error
    pub fn status(&self) -> Status {
        self.status
    }

    /// JSON body of this error
    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }

    /// Value of the `WWW-Authenticate` header, if any
    pub fn challenge(&self) -> Option<&str> {
        self.challenge.as_deref()
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let (status, code) = match &error {
            Error::NotFound { .. } => (Status::NotFound, "not_found"),
            Error::Configuration { .. } => (Status::ServiceUnavailable, "configuration_error"),
            Error::Internal { .. } => (Status::InternalServerError, "internal_error"),
        };

        if status == Status::InternalServerError {
            tracing::error!(error = %error, "Request failed");
        } else {
            tracing::debug!(error = %error, status = status.code, "Request rejected");
        }

        Self::new(status, code, error.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let mut builder = Response::build_from(Json(self.body).respond_to(request)?);
        builder.status(self.status);
        if let Some(challenge) = self.challenge {
            builder.raw_header(WWW_AUTHENTICATE_HEADER, challenge);
        }
        builder.ok()
    }
}

/// `WWW-Authenticate` value for a Basic challenge
pub fn basic_challenge(realm: &str) -> String {
    format!("{BASIC_SCHEME} realm=\"{realm}\"")
}

fn configured_realm(request: &Request<'_>) -> String {
    request
        .rocket()
        .state::<Arc<AppContext>>()
        .map(|context| context.config.auth.realm.clone())
        .unwrap_or_else(|| DEFAULT_AUTH_REALM.to_string())
}

#[catch(400)]
fn bad_request() -> ApiError {
    ApiError::new(
        Status::BadRequest,
        "bad_request",
        "The request could not be parsed",
    )
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> ApiError {
    let reason = request
        .local_cache(|| AuthFailure(None))
        .0
        .unwrap_or(UnauthorizedReason::MissingCredentials);
    ApiError::unauthorized(reason, &configured_realm(request))
}

#[catch(404)]
fn not_found(request: &Request<'_>) -> ApiError {
    ApiError::new(
        Status::NotFound,
        "not_found",
        format!("No route for {} {}", request.method(), request.uri()),
    )
}

#[catch(413)]
fn payload_too_large() -> ApiError {
    ApiError::new(
        Status::PayloadTooLarge,
        "payload_too_large",
        "The request body exceeds the configured size limit",
    )
}

#[catch(422)]
fn unprocessable_entity() -> ApiError {
    ApiError::new(
        Status::UnprocessableEntity,
        "invalid_body",
        "The request body does not describe a book",
    )
}

#[catch(500)]
fn internal_error() -> ApiError {
    ApiError::new(
        Status::InternalServerError,
        "internal_error",
        "Internal server error",
    )
}

#[catch(503)]
fn service_unavailable() -> ApiError {
    ApiError::auth_not_configured(
        "Authentication is required but no credentials are configured. \
         Set SHELF__AUTH__USERNAME and SHELF__AUTH__PASSWORD or auth.username and auth.password in config.",
    )
}

/// JSON catchers for the statuses the API can produce
pub fn json_catchers() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        not_found,
        payload_too_large,
        unprocessable_entity,
        internal_error,
        service_unavailable
    ]
}
