//! Published preview pages under `/flutter_apps/<projectId>`

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use fforge_core::prelude::*;
use fforge_gen::{load_preview_html, TextGenerator};

use crate::state::ServerState;

pub fn router<G>() -> Router<ServerState<G>>
where
    G: TextGenerator + Sync + 'static,
{
    Router::new()
        .route("/flutter_apps/:project_id", get(serve_preview::<G>))
        .route("/flutter_apps/:project_id/", get(serve_preview::<G>))
}

async fn serve_preview<G>(
    State(state): State<ServerState<G>>,
    Path(project_id): Path<String>,
) -> Response
where
    G: TextGenerator + Sync + 'static,
{
    match load_preview_html(state.public_dir(), &project_id).await {
        Ok(html) => (
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
                (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
            ],
            html,
        )
            .into_response(),
        Err(Error::InvalidProjectId { id }) => {
            warn!("Rejected preview request for '{}'", id);
            (StatusCode::BAD_REQUEST, "Invalid project ID").into_response()
        }
        Err(Error::ProjectNotFound { .. }) => {
            (StatusCode::NOT_FOUND, "Project not found").into_response()
        }
        Err(e) => {
            error!("Failed to serve preview {}: {}", project_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error serving Flutter app").into_response()
        }
    }
}
