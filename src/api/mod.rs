//! HTTP handlers and routing

pub mod health;
pub mod webhook;

use axum::{Router, routing};

use crate::SharedState;

pub use health::root;
pub use webhook::handle_gitlab_webhook;

pub const WEBHOOK_PATH: &str = "/gitlab-link";

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", routing::get(root))
        .route(WEBHOOK_PATH, routing::post(handle_gitlab_webhook))
        .with_state(state)
}
