pub mod contact;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new().route("/api/contact", post(contact::submit))
}

pub fn health_routes() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health::live))
        .route("/health/ready", get(health::ready))
}
