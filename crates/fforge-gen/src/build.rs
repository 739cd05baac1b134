//! Server-side project builds published under `flutter_apps/`

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tokio::time::timeout;

use fforge_core::prelude::*;

use crate::app::{sanitize_relative_path, GeneratedFile};
use crate::site::APPS_DIR;

const BUILD_TIMEOUT: Duration = Duration::from_secs(600);
const ID_SUFFIX_LEN: usize = 8;

/// Result of a build request, as reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    pub success: bool,
    pub project_id: String,
    pub preview_url: String,
    pub message: String,
}

/// How the published preview was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// `flutter build web` output
    FlutterWeb,
    /// Static page listing the sources
    SourceListing,
}

/// Writes generated sources and publishes a browsable preview
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    /// Directory served over HTTP; previews go under `flutter_apps/`
    public_dir: PathBuf,
    /// Scratch directory holding one source tree per project id
    workspace_dir: PathBuf,
    /// Path of the `flutter` executable, `None` to always publish listings
    flutter: Option<PathBuf>,
}

impl ProjectBuilder {
    /// Builder that uses `flutter` from `PATH` when present
    pub fn new(public_dir: impl Into<PathBuf>, workspace_dir: impl Into<PathBuf>) -> Self {
        let flutter = which::which("flutter")
            .inspect_err(|e| debug!("flutter not found on PATH: {}", e))
            .ok();
        Self {
            public_dir: public_dir.into(),
            workspace_dir: workspace_dir.into(),
            flutter,
        }
    }

    /// Builder that never invokes the Flutter toolchain
    pub fn listing_only(public_dir: impl Into<PathBuf>, workspace_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            workspace_dir: workspace_dir.into(),
            flutter: None,
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn mode(&self) -> BuildMode {
        if self.flutter.is_some() {
            BuildMode::FlutterWeb
        } else {
            BuildMode::SourceListing
        }
    }

    /// Write, build and publish a project
    pub async fn build(&self, files: &[GeneratedFile], project_name: &str) -> Result<BuildResult> {
        if files.is_empty() {
            return Err(Error::validation("No generated project to build"));
        }

        let project_id = new_project_id(project_name);
        let source_dir = self.workspace_dir.join(&project_id);
        let publish_dir = self.public_dir.join(APPS_DIR).join(&project_id);

        info!("Building project {} ({} files)", project_id, files.len());
        write_sources(&source_dir, files).await?;

        let message = match &self.flutter {
            Some(flutter) => {
                run_flutter_build(flutter, &source_dir, &project_id).await?;
                copy_dir(&source_dir.join("build").join("web"), &publish_dir).await?;
                format!("Flutter web build published for {}", project_name)
            }
            None => {
                tokio::fs::create_dir_all(&publish_dir).await?;
                let html = source_listing_html(project_name, files);
                tokio::fs::write(publish_dir.join("index.html"), html).await?;
                "Flutter SDK not found; published a source listing instead".to_string()
            }
        };

        Ok(BuildResult {
            success: true,
            preview_url: format!("/{}/{}", APPS_DIR, project_id),
            project_id,
            message,
        })
    }
}

/// Sanitized name plus a random alphanumeric suffix
pub fn new_project_id(project_name: &str) -> String {
    let mut base: String = project_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    while base.contains("--") {
        base = base.replace("--", "-");
    }
    let base = base.trim_matches('-');
    let base = if base.is_empty() { "flutter-app" } else { base };

    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}-{}", base, suffix.to_lowercase())
}

async fn write_sources(dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let relative = sanitize_relative_path(&file.path)
            .map_err(|e| Error::build(e.to_string()))?;
        let target = dir.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &file.content).await?;
    }
    Ok(())
}

async fn run_flutter_build(flutter: &Path, project_dir: &Path, project_id: &str) -> Result<()> {
    let base_href = format!("/{}/{}/", APPS_DIR, project_id);
    let child = Command::new(flutter)
        .args(["build", "web", "--base-href", &base_href])
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = timeout(BUILD_TIMEOUT, child)
        .await
        .map_err(|_| Error::build("flutter build web timed out"))?
        .map_err(|e| Error::build(format!("failed to run flutter: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::build(format!(
            "flutter build web exited with {:?}: {}",
            output.status.code(),
            stderr.trim()
        )));
    }
    debug!("flutter build web finished for {}", project_id);
    Ok(())
}

async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    let mut pending = vec![(from.to_path_buf(), to.to_path_buf())];
    while let Some((src, dst)) = pending.pop() {
        tokio::fs::create_dir_all(&dst).await?;
        let mut entries = tokio::fs::read_dir(&src).await?;
        while let Some(entry) = entries.next_entry().await? {
            let target = dst.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                pending.push((entry.path(), target));
            } else {
                tokio::fs::copy(entry.path(), target).await?;
            }
        }
    }
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Static page showing every source file
pub fn source_listing_html(project_name: &str, files: &[GeneratedFile]) -> String {
    let title = escape_html(project_name);
    let mut sections = String::new();
    for file in files {
        sections.push_str(&format!(
            "<section><h2>{}</h2><pre><code>{}</code></pre></section>\n",
            escape_html(&file.path),
            escape_html(&file.content)
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>body{{font-family:sans-serif;margin:2rem}}pre{{background:#f4f4f8;padding:1rem;overflow:auto}}</style>\n\
         </head>\n<body>\n<h1>{title}</h1>\n<p>{count} generated files</p>\n{sections}</body>\n</html>\n",
        title = title,
        count = files.len(),
        sections = sections,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_project_id_format() {
        let id = new_project_id("My Cool App!");
        assert!(id.starts_with("my-cool-app-"));
        assert_eq!(id.len(), "my-cool-app-".len() + ID_SUFFIX_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_project_id_blank_name() {
        assert!(new_project_id("  ").starts_with("flutter-app-"));
        assert_ne!(new_project_id("x"), new_project_id("x"));
    }

    #[test]
    fn test_source_listing_escapes() {
        let html = source_listing_html(
            "<Brew>",
            &[GeneratedFile::new("lib/main.dart", "if (a < b && c) {}")],
        );
        assert!(html.contains("<title>&lt;Brew&gt;</title>"));
        assert!(html.contains("if (a &lt; b &amp;&amp; c) {}"));
        assert!(html.contains("1 generated files"));
    }

    #[tokio::test]
    async fn test_build_without_flutter_publishes_listing() {
        let public = tempdir().unwrap();
        let work = tempdir().unwrap();
        let builder = ProjectBuilder::listing_only(public.path(), work.path());
        assert_eq!(builder.mode(), BuildMode::SourceListing);

        let files = vec![
            GeneratedFile::new("lib/main.dart", "void main() {}"),
            GeneratedFile::new("pubspec.yaml", "name: brew"),
        ];
        let result = builder.build(&files, "Brew").await.unwrap();

        assert!(result.success);
        assert_eq!(result.preview_url, format!("/flutter_apps/{}", result.project_id));
        assert!(work
            .path()
            .join(&result.project_id)
            .join("lib/main.dart")
            .exists());
        let index = public
            .path()
            .join("flutter_apps")
            .join(&result.project_id)
            .join("index.html");
        let html = std::fs::read_to_string(index).unwrap();
        assert!(html.contains("void main() {}"));
    }

    #[tokio::test]
    async fn test_build_requires_files() {
        let dir = tempdir().unwrap();
        let builder = ProjectBuilder::listing_only(dir.path(), dir.path());
        let err = builder.build(&[], "Brew").await.unwrap_err();
        assert_eq!(err.to_string(), "No generated project to build");
    }

    #[test]
    fn test_build_result_serializes_camel_case() {
        let result = BuildResult {
            success: true,
            project_id: "brew-abc".into(),
            preview_url: "/flutter_apps/brew-abc".into(),
            message: "ok".into(),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["projectId"], "brew-abc");
        assert_eq!(json["previewUrl"], "/flutter_apps/brew-abc");
    }
}
