//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back through the
//! message channel. Tasks never touch [`AppState`](crate::state::AppState).

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use fforge_core::prelude::*;
use fforge_gen::{generate_app, generate_page, write_archive, ProjectBuilder, TextGenerator};

use crate::message::Message;
use crate::UpdateAction;

/// Collaborators the action executor hands work to
#[derive(Debug)]
pub struct Services<G> {
    pub generator: Arc<G>,
    pub builder: Arc<ProjectBuilder>,
    /// Directory zip archives are written to
    pub archive_dir: PathBuf,
}

impl<G> Clone for Services<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            builder: Arc::clone(&self.builder),
            archive_dir: self.archive_dir.clone(),
        }
    }
}

impl<G> Services<G> {
    pub fn new(generator: G, builder: ProjectBuilder, archive_dir: PathBuf) -> Self {
        Self {
            generator: Arc::new(generator),
            builder: Arc::new(builder),
            archive_dir,
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<G>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<G>)
where
    G: TextGenerator + Sync + 'static,
{
    match action {
        UpdateAction::ArmSplashTimer(timer) => {
            tokio::spawn(async move {
                tokio::time::sleep(timer.delay).await;
                let _ = msg_tx
                    .send(Message::SplashTimerFired { token: timer.token })
                    .await;
            });
        }

        UpdateAction::GeneratePage { page, request } => {
            let generator = Arc::clone(&services.generator);
            tokio::spawn(async move {
                let response = generate_page(generator.as_ref(), &request).await;
                let _ = msg_tx.send(Message::PageGenerated { page, response }).await;
            });
        }

        UpdateAction::GenerateApp { prompt } => {
            let generator = Arc::clone(&services.generator);
            tokio::spawn(async move {
                let msg = match generate_app(generator.as_ref(), &prompt).await {
                    Ok(files) => Message::AppGenerated { files },
                    Err(e) => Message::AppGenerationFailed {
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::WriteArchive { app_name, files } => {
            let dir = services.archive_dir.clone();
            tokio::spawn(async move {
                let result =
                    tokio::task::spawn_blocking(move || write_archive(&dir, &app_name, &files)).await;
                let msg = match result {
                    Ok(Ok(path)) => Message::ArchiveWritten { path },
                    Ok(Err(e)) => Message::ArchiveFailed {
                        error: e.to_string(),
                    },
                    Err(e) => {
                        error!("Archive task panicked: {}", e);
                        Message::ArchiveFailed {
                            error: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::BuildProject {
            project_name,
            files,
        } => {
            let builder = Arc::clone(&services.builder);
            tokio::spawn(async move {
                let msg = match builder.build(&files, &project_name).await {
                    Ok(result) => Message::BuildFinished(result),
                    Err(e) => {
                        warn!("Build of '{}' failed: {}", project_name, e);
                        Message::BuildFailed {
                            error: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}
