//! # fforge-server - HTTP Service
//!
//! axum service in front of [`fforge_gen`]: page and app generation, zip
//! downloads, project builds, and the published `flutter_apps/` previews.
//!
//! ## Public API
//!
//! - [`router()`] - Build the service for a generator and project builder
//! - [`serve()`] - Bind and run until Ctrl+C
//! - [`ServerState`] - Shared handler state
//! - [`ApiError`] - [`fforge_core::Error`] mapped onto HTTP status codes

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::ServerState;

use tokio::net::TcpListener;

use fforge_core::prelude::*;
use fforge_gen::TextGenerator;

/// Serve the API on `bind` until Ctrl+C
pub async fn serve<G>(bind: &str, state: ServerState<G>) -> Result<()>
where
    G: TextGenerator + Sync + 'static,
{
    let app = router(state);
    let listener = TcpListener::bind(bind).await?;
    info!("Flutter Forge API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
    }
}
