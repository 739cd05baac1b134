//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("{message}")]
    Validation { message: String },

    // ─────────────────────────────────────────────────────────────
    // Generation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Generator unavailable: {reason}")]
    GeneratorUnavailable { reason: String },

    #[error("Generation failed: {message}")]
    Generation { message: String },

    #[error("HTTP error: {message}")]
    Http { message: String },

    // ─────────────────────────────────────────────────────────────
    // Packaging/Build Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Packaging error: {message}")]
    Packaging { message: String },

    #[error("Build failed: {message}")]
    Build { message: String },

    #[error("Invalid project ID: {id}")]
    InvalidProjectId { id: String },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn generator_unavailable(reason: impl Into<String>) -> Self {
        Self::GeneratorUnavailable {
            reason: reason.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn packaging(message: impl Into<String>) -> Self {
        Self::Packaging {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    pub fn invalid_project_id(id: impl Into<String>) -> Self {
        Self::InvalidProjectId { id: id.into() }
    }

    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::ProjectNotFound { id: id.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are surfaced to the user as a message while the
    /// builder keeps running with its configuration untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. }
                | Error::GeneratorUnavailable { .. }
                | Error::Generation { .. }
                | Error::Http { .. }
                | Error::Packaging { .. }
                | Error::Build { .. }
        )
    }
}
