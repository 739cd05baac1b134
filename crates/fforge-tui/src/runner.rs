//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use tokio::sync::mpsc;

use fforge_app::config::Settings;
use fforge_app::process::process_message;
use fforge_app::signals;
use fforge_app::watcher::{ConfigWatcher, WatcherConfig};
use fforge_app::{AppState, Message, Services};
use fforge_core::prelude::*;
use fforge_core::AppConfiguration;
use fforge_gen::TextGenerator;

use super::event::{self, DragTracker};
use super::{render, terminal};

/// Run the builder TUI for a project
pub async fn run<G>(
    project_path: PathBuf,
    settings: Settings,
    config: AppConfiguration,
    services: Services<G>,
) -> Result<()>
where
    G: TextGenerator + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mouse = settings.ui.mouse;
    if mouse {
        if let Err(e) = terminal::enable_mouse() {
            warn!("{}", e);
        }
    }

    let mut watcher = settings.watcher.enabled.then(|| {
        ConfigWatcher::new(
            project_path.clone(),
            WatcherConfig::from_settings(&settings.watcher),
        )
    });

    let mut state = AppState::new(project_path, settings, config);

    // Unified message channel: signals, timers, generation results, watcher
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    if let Some(watcher) = watcher.as_mut() {
        if let Err(e) = watcher.start(msg_tx.clone()) {
            warn!("Failed to start config watcher: {}", e);
            state.set_error(format!("Failed to start config watcher: {}", e));
        } else {
            info!("Watching {} for changes", fforge_app::config::APP_CONFIG_FILENAME);
        }
    }

    process_message(&mut state, Message::MountPreview, &msg_tx, &services);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &services);

    if let Some(watcher) = watcher.as_mut() {
        watcher.stop();
    }
    if mouse {
        terminal::disable_mouse();
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<G>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<G>,
) -> Result<()>
where
    G: TextGenerator + Sync + 'static,
{
    let mut drag = DragTracker::new();

    while !state.should_quit() {
        // Messages from background tasks (timers, generation, watcher, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, services);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(&mut drag)? {
            process_message(state, message, &msg_tx, services);
        }
    }

    Ok(())
}
