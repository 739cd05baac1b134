//! Project builds and zip downloads

use axum::extract::State;
use chrono::Utc;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use fforge_core::prelude::*;
use fforge_gen::{archive_bytes, archive_file_name, BuildResult, GeneratedFile, TextGenerator};

use crate::error::ApiError;
use crate::state::ServerState;

pub fn router<G>() -> Router<ServerState<G>>
where
    G: TextGenerator + Sync + 'static,
{
    Router::new()
        .route("/api/build-flutter", post(api_build::<G>))
        .route("/api/download", post(api_download))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
    #[serde(default)]
    pub project_name: String,
}

async fn api_build<G>(
    State(state): State<ServerState<G>>,
    Json(request): Json<ProjectRequest>,
) -> std::result::Result<Json<BuildResult>, ApiError>
where
    G: TextGenerator + Sync + 'static,
{
    let result = state
        .builder
        .build(&request.files, &request.project_name)
        .await?;
    info!("Published {} at {}", result.project_id, result.preview_url);
    Ok(Json(result))
}

async fn api_download(Json(request): Json<ProjectRequest>) -> std::result::Result<impl IntoResponse, ApiError> {
    if request.files.is_empty() {
        return Err(Error::validation("No files available for download").into());
    }
    // An in-memory archive only fails on bad input, e.g. an escaping path
    let bytes = archive_bytes(&request.files).map_err(|e| Error::validation(e.to_string()))?;
    let file_name = archive_file_name(&request.project_name, Utc::now().timestamp_millis());
    debug!("Serving {} ({} bytes)", file_name, bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}

