//! Lookup of published preview sites

use std::path::{Path, PathBuf};

use fforge_core::prelude::*;

/// Directory under the public root holding one folder per project id
pub const APPS_DIR: &str = "flutter_apps";

/// Accept only `[a-zA-Z0-9_-]+`
pub fn sanitize_project_id(id: &str) -> Result<&str> {
    if !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(id)
    } else {
        Err(Error::invalid_project_id(id))
    }
}

pub fn preview_index_path(public_dir: &Path, project_id: &str) -> Result<PathBuf> {
    let id = sanitize_project_id(project_id)?;
    Ok(public_dir.join(APPS_DIR).join(id).join("index.html"))
}

/// Read a published preview's `index.html`
pub async fn load_preview_html(public_dir: &Path, project_id: &str) -> Result<String> {
    let path = preview_index_path(public_dir, project_id)?;
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(html),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No preview at {}", path.display());
            Err(Error::project_not_found(project_id))
        }
        Err(e) => Err(e.into()),
    }
}
