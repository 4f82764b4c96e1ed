//! Service banner at `/`.

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;

/// Describe the service and the paths it serves.
#[get("/")]
pub async fn banner(state: web::Data<HttpState>) -> HttpResponse {
    envelope::ok(
        json!({
            "message": "Shelter API Server",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "animals": "/api/animals",
                "members": "/api/members",
                "health": "/health",
            },
        }),
        Some("Welcome to Shelter API Server"),
        state.clock.utc(),
    )
}
