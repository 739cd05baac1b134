use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use fforge_gen::TextGenerator;

use crate::state::ServerState;

pub fn router<G>() -> Router<ServerState<G>>
where
    G: TextGenerator + Sync + 'static,
{
    Router::new().route("/api/health", get(api_health))
}

async fn api_health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "flutter-forge",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
