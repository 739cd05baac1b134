//! Full-project generation

use std::collections::HashSet;
use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fforge_core::prelude::*;

use crate::client::TextGenerator;
use crate::page::parse_json_reply;

/// One file of a generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Relative to the project root, `/`-separated
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Ask the model for a whole project and parse the file list
pub async fn generate_app<G: TextGenerator>(generator: &G, prompt: &str) -> Result<Vec<GeneratedFile>> {
    info!("Generating app ({} prompt chars)", prompt.len());
    let reply = generator.generate(prompt).await?;
    let files = parse_app_reply(&reply)?;
    info!("Generated {} files", files.len());
    Ok(files)
}

/// Parse a project reply
///
/// Accepts `{"files": [...]}`, a bare JSON array, or markdown fenced blocks
/// whose info string (or first comment line) names the file path. Unsafe
/// paths are dropped with a warning; later duplicates of a path are ignored.
pub fn parse_app_reply(reply: &str) -> Result<Vec<GeneratedFile>> {
    let candidates = match parse_json_reply(reply) {
        Some(value) => files_from_json(&value)?,
        None => files_from_fences(reply),
    };

    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(candidates.len());
    for file in candidates {
        match sanitize_relative_path(&file.path) {
            Ok(path) => {
                if seen.insert(path.clone()) {
                    files.push(GeneratedFile::new(path, file.content));
                } else {
                    debug!("Skipping duplicate generated file {}", path);
                }
            }
            Err(e) => warn!("Dropping generated file: {}", e),
        }
    }

    if files.is_empty() {
        return Err(Error::generation("No files generated"));
    }
    Ok(files)
}

fn files_from_json(value: &Value) -> Result<Vec<GeneratedFile>> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(map) => map
            .get("files")
            .ok_or_else(|| Error::generation("Reply has no \"files\" list"))?,
        _ => return Err(Error::generation("Reply is not a file list")),
    };
    let files: Vec<GeneratedFile> = serde_json::from_value(list.clone())
        .map_err(|e| Error::generation(format!("Malformed file list: {}", e)))?;
    Ok(files)
}

static FENCED_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```([^\n]*)\n(.*?)```").expect("Invalid fenced file regex"));

/// Path-looking token: has a `.` or `/` and no spaces
static PATH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\-./\\]*[./][\w\-./\\]*$").expect("Invalid path token regex")
});

fn files_from_fences(reply: &str) -> Vec<GeneratedFile> {
    FENCED_FILE
        .captures_iter(reply)
        .filter_map(|caps| {
            let info = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let body = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            fenced_file(info, body)
        })
        .collect()
}

fn fenced_file(info: &str, body: &str) -> Option<GeneratedFile> {
    if let Some(path) = info
        .split_whitespace()
        .rev()
        .find(|token| PATH_TOKEN.is_match(token))
    {
        return Some(GeneratedFile::new(path, body));
    }

    // `// lib/main.dart` or `# pubspec.yaml` as the first line
    let (first, rest) = body.split_once('\n').unwrap_or((body, ""));
    let marker = first
        .trim()
        .strip_prefix("//")
        .or_else(|| first.trim().strip_prefix('#'))?
        .trim();
    let marker = marker.strip_prefix("File:").map(str::trim).unwrap_or(marker);
    if PATH_TOKEN.is_match(marker) {
        Some(GeneratedFile::new(marker, rest))
    } else {
        None
    }
}

/// Normalize a project-relative path, refusing anything that escapes the root
pub fn sanitize_relative_path(raw: &str) -> Result<String> {
    let normalized = raw.trim().replace('\\', "/");
    if normalized.is_empty() {
        return Err(Error::generation("empty file path"));
    }

    let mut parts = Vec::new();
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::generation(format!("unsafe file path '{}'", raw)));
            }
        }
    }
    if parts.is_empty() || parts.iter().any(|p| p.contains(':')) {
        return Err(Error::generation(format!("unsafe file path '{}'", raw)));
    }
    Ok(parts.join("/"))
}
