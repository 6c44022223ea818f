//! Server-specific constants

/// Request header carrying credentials
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Response header carrying the authentication challenge
pub const WWW_AUTHENTICATE_HEADER: &str = "WWW-Authenticate";

/// Scheme prefix of HTTP Basic credentials
pub const BASIC_SCHEME: &str = "Basic";
