use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, Sse},
    response::{IntoResponse, Json},
};
use futures::StreamExt;
use tracing::warn;

use crate::AppState;

// --- Handlers ---

/// GET /movies — the full catalog as a JSON array.
pub async fn api_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.all().await {
        Ok(movies) => Json(movies).into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to list movies");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /movies/{id} — one movie, 404 when the id is unknown.
pub async fn api_movie_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.service.by_id(&id).await {
        Ok(Some(movie)) => Json(movie).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            warn!(error = %e, id, "Failed to load movie");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /movies/{id}/events — watch events as SSE frames, one per second,
/// until the client disconnects. An unknown id answers 200 with a body
/// that completes without emitting.
pub async fn api_movie_events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.service.watch_events_by_id(&id).await {
        Ok(events) => {
            let frames = events.map(|event| Event::default().json_data(&event));
            Sse::new(frames).into_response()
        }
        Err(e) => {
            warn!(error = %e, id, "Failed to open watch stream");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// --- Tests ---
