//! Liveness probe

use rocket::get;
use rocket::serde::json::Json;
use serde::Serialize;

/// Body of `GET /live`
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    /// Always `true` while the process serves requests
    pub alive: bool,
}

/// Liveness check
///
/// Unauthenticated and independent of any binding.
#[get("/live")]
pub fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { alive: true })
}
