//! Zip packaging of generated projects

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use fforge_core::prelude::*;

use crate::app::{sanitize_relative_path, GeneratedFile};

/// `<app name or "Flutter">-Project-<unix millis>.zip`
pub fn archive_file_name(app_name: &str, timestamp_millis: i64) -> String {
    let name = app_name.trim();
    let name = if name.is_empty() { "Flutter" } else { name };
    // Keep the name usable as a single path component
    let name: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    format!("{}-Project-{}.zip", name, timestamp_millis)
}

/// Build the archive in memory
pub fn archive_bytes(files: &[GeneratedFile]) -> Result<Vec<u8>> {
    if files.is_empty() {
        return Err(Error::packaging("No files available for download"));
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for file in files {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);
        let path = sanitize_relative_path(&file.path)
            .map_err(|e| Error::packaging(e.to_string()))?;
        writer
            .start_file(path.as_str(), options)
            .map_err(|e| Error::packaging(format!("failed to add {}: {}", path, e)))?;
        writer.write_all(file.content.as_bytes())?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| Error::packaging(format!("failed to finish archive: {}", e)))?;
    Ok(cursor.into_inner())
}

/// Write the archive into `dir`, returning its path
pub fn write_archive(dir: &Path, app_name: &str, files: &[GeneratedFile]) -> Result<PathBuf> {
    let bytes = archive_bytes(files)?;
    std::fs::create_dir_all(dir)?;

    let file_name = archive_file_name(app_name, chrono::Utc::now().timestamp_millis());
    let path = dir.join(file_name);
    std::fs::write(&path, &bytes)?;

    info!("Wrote {} ({} bytes, {} files)", path.display(), bytes.len(), files.len());
    Ok(path)
}
