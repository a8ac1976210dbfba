pub mod health;
pub mod publish;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/publish/{msg}", post(publish::publish_message))
        // an empty segment never matches `{msg}`
        .route("/publish/", post(publish::publish_empty))
}
