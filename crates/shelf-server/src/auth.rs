//! HTTP Basic authentication
//!
//! [`BasicAuth`] is a request guard: add it to a handler's parameters and
//! the handler only runs for requests whose `Authorization` header carries
//! credentials accepted by the context's
//! [`CredentialVerifier`](shelf_domain::ports::CredentialVerifier).
//!
//! | Condition | Status |
//! |-----------|--------|
//! | Credentials configured and matching | handler runs |
//! | Header missing, malformed or not matching | 401 + `WWW-Authenticate` |
//! | No credentials configured | 503 |

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use shelf_domain::ports::{AuthOutcome, Credentials, UnauthorizedReason};
use shelf_infrastructure::di::AppContext;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::constants::{AUTHORIZATION_HEADER, BASIC_SCHEME};

/// Authenticated caller
///
/// ```rust,ignore
/// #[post("/books/<id>", data = "<payload>")]
/// async fn update_book(id: &str, auth: BasicAuth, payload: Json<UpdateBook>) { ... }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// Username that passed verification
    pub username: String,
}

/// Why the guard rejected a request
#[derive(Debug)]
pub enum BasicAuthError {
    /// Credentials missing or wrong
    Unauthorized(UnauthorizedReason),
    /// No credentials configured to compare against
    NotConfigured(String),
    /// Verification itself failed
    Internal(String),
}

/// Rejection reason cached on the request for the 401 catcher
#[derive(Debug, Clone, Copy)]
pub struct AuthFailure(pub Option<UnauthorizedReason>);

/// Decode an `Authorization: Basic <base64(user:pass)>` header value
///
/// Returns `None` for any other scheme or a payload that is not valid
/// base64-encoded UTF-8 containing a `:`. The password may itself contain `:`.
pub fn parse_basic_authorization(value: &str) -> Option<Credentials> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(Credentials::new(username, password))
}

fn reject(
    request: &Request<'_>,
    reason: UnauthorizedReason,
) -> request::Outcome<BasicAuth, BasicAuthError> {
    request.local_cache(|| AuthFailure(Some(reason)));
    Outcome::Error((Status::Unauthorized, BasicAuthError::Unauthorized(reason)))
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BasicAuth {
    type Error = BasicAuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(context) = request.rocket().state::<Arc<AppContext>>() else {
            return Outcome::Error((
                Status::InternalServerError,
                BasicAuthError::Internal("application context is not managed".to_string()),
            ));
        };

        // Resolved per request so overridden settings take effect immediately
        let verifier = match context.credential_verifier() {
            Ok(verifier) => verifier,
            Err(e) => {
                warn!(error = %e, "Rejecting authenticated request: credentials not configured");
                return Outcome::Error((
                    Status::ServiceUnavailable,
                    BasicAuthError::NotConfigured(e.to_string()),
                ));
            }
        };

        let credentials = match request.headers().get_one(AUTHORIZATION_HEADER) {
            None => None,
            Some(value) => match parse_basic_authorization(value) {
                Some(credentials) => Some(credentials),
                None => {
                    debug!("Malformed Authorization header");
                    return reject(request, UnauthorizedReason::MalformedCredentials);
                }
            },
        };

        match verifier.verify(credentials.as_ref()) {
            Ok(AuthOutcome::Authorized { username }) => Outcome::Success(BasicAuth { username }),
            Ok(AuthOutcome::Unauthorized(reason)) => reject(request, reason),
            Err(e) => Outcome::Error((
                Status::InternalServerError,
                BasicAuthError::Internal(e.to_string()),
            )),
        }
    }
}
