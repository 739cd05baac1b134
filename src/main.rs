//! Flutter Forge - Terminal builder and live preview for AI-generated Flutter apps
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use fforge_app::config::{
    init_config_dir, load_app_config, load_settings, write_sample_app_config, Settings,
    APP_CONFIG_FILENAME,
};
use fforge_app::Services;
use fforge_core::logging;
use fforge_gen::{GeminiClient, ProjectBuilder};
use fforge_server::ServerState;
use tracing::{info, warn};

/// Flutter Forge - design, preview and generate Flutter apps from the terminal
#[derive(Parser, Debug)]
#[command(name = "fforge", version)]
#[command(about = "Terminal builder and live preview for AI-generated Flutter apps", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Project directory holding fforge.toml (runs `preview`)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the builder with the live preview (default)
    Preview {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
    /// Serve the generation and preview HTTP API
    Serve {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Listen address, overrides `[server] bind`
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Write .fforge/config.toml and a sample fforge.toml
    Init {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Preview { path: cli.path }) {
        Command::Preview { path } => preview(project_dir(path)).await,
        Command::Serve { path, bind } => serve(project_dir(path), bind).await,
        Command::Init { path } => init(&project_dir(path)),
    }
}

/// Given path, or the current directory
fn project_dir(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn project_builder(project_path: &Path, settings: &Settings) -> ProjectBuilder {
    ProjectBuilder::new(
        project_path.join(&settings.server.public_dir),
        project_path.join(&settings.output.workspace_dir),
    )
}

fn gemini_client(settings: &Settings) -> Result<GeminiClient> {
    let client = GeminiClient::new(settings.generator.to_gemini_config())?;
    if !client.has_api_key() {
        warn!(
            "{} is not set; generation requests will fail",
            settings.generator.api_key_env
        );
    }
    Ok(client)
}

async fn preview(project_path: PathBuf) -> Result<()> {
    logging::init()?;

    let settings = load_settings(&project_path);
    let config = load_app_config(&project_path)?;
    info!(
        "Opening builder for '{}' in {}",
        config.display_name(),
        project_path.display()
    );

    let services = Services::new(
        gemini_client(&settings)?,
        project_builder(&project_path, &settings),
        project_path.join(&settings.output.archive_dir),
    );

    fforge_tui::run(project_path, settings, config, services).await?;
    Ok(())
}

async fn serve(project_path: PathBuf, bind: Option<String>) -> Result<()> {
    logging::init_with_stderr()?;

    let settings = load_settings(&project_path);
    let bind = bind.unwrap_or_else(|| settings.server.bind.clone());
    let builder = project_builder(&project_path, &settings);
    info!(
        "Publishing previews from {} ({:?} builds)",
        builder.public_dir().display(),
        builder.mode()
    );

    let state = ServerState::new(gemini_client(&settings)?, builder);
    fforge_server::serve(&bind, state).await?;
    Ok(())
}

fn init(project_path: &Path) -> Result<()> {
    init_config_dir(project_path)?;
    eprintln!("✅ Settings in {}", project_path.join(".fforge").display());

    if write_sample_app_config(project_path)? {
        eprintln!("✅ Wrote sample {}", APP_CONFIG_FILENAME);
    } else {
        eprintln!("   {} already exists, left untouched", APP_CONFIG_FILENAME);
    }
    Ok(())
}
