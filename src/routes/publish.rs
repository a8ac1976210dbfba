use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{state::AppState, usecases::publish::acknowledgement};

pub async fn publish_message(
    State(state): State<AppState>,
    Path(msg): Path<String>,
) -> impl IntoResponse {
    forward(&state, &msg).await
}

pub async fn publish_empty(State(state): State<AppState>) -> impl IntoResponse {
    forward(&state, "").await
}

async fn forward(state: &AppState, msg: &str) -> Response {
    match state.publisher.publish(msg).await {
        Ok(()) => (StatusCode::OK, acknowledgement(msg)).into_response(),
        Err(e) => {
            tracing::error!(
                "failed to publish {msg:?} to {}: {e:?}",
                state.publisher.channel()
            );

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}
