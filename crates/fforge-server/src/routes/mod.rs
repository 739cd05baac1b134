//! Route table
//!
//! `/api/*` speaks JSON; `/flutter_apps/<id>` serves published previews and
//! everything else under the public directory is served as static files.

mod build;
mod generate;
mod health;
mod preview;


use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use fforge_gen::TextGenerator;

use crate::state::ServerState;

/// Build the service
pub fn router<G>(state: ServerState<G>) -> Router
where
    G: TextGenerator + Sync + 'static,
{
    let assets = ServeDir::new(state.public_dir());

    Router::new()
        .merge(health::router())
        .merge(generate::router())
        .merge(build::router())
        .merge(preview::router())
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
