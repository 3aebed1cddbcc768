use std::io;

use thiserror::Error;

/// Library-wide error type for promptkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Template form input failed validation.
    #[error("{0}")]
    InvalidTemplate(String),

    /// No template with the given id exists.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Built-in templates cannot be removed.
    #[error("Template '{0}' is built-in and cannot be deleted")]
    BuiltinTemplateImmutable(String),

    /// Custom template cap reached.
    #[error("Max {0} custom templates allowed.")]
    CustomTemplateLimit(usize),

    /// Generation requested with blank input.
    #[error("Content is empty. Provide some text to splice into the template.")]
    EmptyContent,

    /// A generation is already running for this session.
    #[error("A prompt is already being generated")]
    GenerationInProgress,

    /// Copy/export requested before anything was generated.
    #[error("Nothing generated yet. Run 'promptkit generate' first.")]
    NoGeneratedContent,

    /// History position out of range.
    #[error("History entry {position} not found ({available} available)")]
    HistoryEntryNotFound { position: usize, available: usize },

    /// Export format is not recognized.
    #[error("Invalid export format '{0}': must be 'txt' or 'md'")]
    InvalidExportFormat(String),

    /// Embedded asset missing or unreadable.
    #[error("Embedded asset error: {0}")]
    Asset(String),

    /// Clipboard access failed.
    #[error("Failed to copy: {0}")]
    ClipboardError(String),

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
