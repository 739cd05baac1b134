//! LLM-backed generation endpoints

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use fforge_core::prelude::*;
use fforge_core::AppConfiguration;
use fforge_gen::{
    app_prompt, generate_app, generate_page, GeneratedFile, PageGenerationRequest,
    PageGenerationResponse, TextGenerator,
};

use crate::error::ApiError;
use crate::state::ServerState;

pub fn router<G>() -> Router<ServerState<G>>
where
    G: TextGenerator + Sync + 'static,
{
    Router::new()
        .route("/api/generate-page", post(api_generate_page::<G>))
        .route("/api/generate-app", post(api_generate_app::<G>))
}

/// Either a ready prompt or a configuration to build one from
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenerateAppRequest {
    Prompt { prompt: String },
    Config { config: AppConfiguration },
}

impl GenerateAppRequest {
    fn into_prompt(self) -> Result<String> {
        match self {
            Self::Prompt { prompt } if prompt.trim().is_empty() => {
                Err(Error::validation("Prompt must not be empty"))
            }
            Self::Prompt { prompt } => Ok(prompt),
            Self::Config { config } => {
                config.validate_for_preview()?;
                Ok(app_prompt(&config))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateAppResponse {
    pub success: bool,
    pub files: Vec<GeneratedFile>,
}

/// Page generation folds model failures into fallback content, so only an
/// invalid request fails here
async fn api_generate_page<G>(
    State(state): State<ServerState<G>>,
    Json(request): Json<PageGenerationRequest>,
) -> std::result::Result<Json<PageGenerationResponse>, ApiError>
where
    G: TextGenerator + Sync + 'static,
{
    request.validate()?;
    let response = generate_page(state.generator.as_ref(), &request).await;
    Ok(Json(response))
}

async fn api_generate_app<G>(
    State(state): State<ServerState<G>>,
    Json(request): Json<GenerateAppRequest>,
) -> std::result::Result<Json<GenerateAppResponse>, ApiError>
where
    G: TextGenerator + Sync + 'static,
{
    let prompt = request.into_prompt()?;
    let files = generate_app(state.generator.as_ref(), &prompt).await?;
    Ok(Json(GenerateAppResponse {
        success: true,
        files,
    }))
}
