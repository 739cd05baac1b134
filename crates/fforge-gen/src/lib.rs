//! # fforge-gen - Generation, Packaging and Builds
//!
//! External collaborators of the builder: the LLM client, prompt builders,
//! page and app generation with fallbacks, zip packaging, server-side
//! project builds and preview-site lookup.
//!
//! Depends on [`fforge_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### LLM Client
//! - [`TextGenerator`] - Send-able prompt-in/text-out trait
//! - [`GeminiClient`] - Gemini `generateContent` REST implementation
//!
//! ### Generation
//! - [`generate_page()`] - One screen, never fails (fallbacks on error)
//! - [`generate_app()`] - Whole project as a list of [`GeneratedFile`]s
//!
//! ### Output
//! - [`write_archive()`] / [`archive_bytes()`] - Zip packaging
//! - [`ProjectBuilder`] - Write sources, build, publish under `flutter_apps/`
//! - [`load_preview_html()`] - Serve a published preview

pub mod app;
pub mod build;
pub mod client;
pub mod package;
pub mod page;
pub mod prompt;
pub mod site;
pub mod templates;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use app::{generate_app, parse_app_reply, sanitize_relative_path, GeneratedFile};
pub use build::{new_project_id, BuildMode, BuildResult, ProjectBuilder};
pub use client::{
    extract_text, GeminiClient, GeminiConfig, LocalTextGenerator, TextGenerator, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
pub use package::{archive_bytes, archive_file_name, write_archive};
pub use page::{generate_page, parse_page_reply, PageGenerationRequest, PageGenerationResponse};
pub use prompt::{app_prompt, page_prompt};
pub use site::{load_preview_html, sanitize_project_id, APPS_DIR};
