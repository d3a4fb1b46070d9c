//! Error types for project generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run
///
/// Every variant is fatal: the binary maps any of them to a non-zero exit status.
/// Installer failures are not represented here because they never fail a run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The target path is already occupied
    #[error("Project folder already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A directory could not be created
    #[error("Failed to create directory: {}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written
    #[error("Failed to write file: {}", path.display())]
    WriteFile {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A database-specific template failed to render
    #[error("Failed to render template: {path}")]
    Render {
        /// Output path of the template
        path: &'static str,
        /// Underlying render error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// The package manifest could not be serialized
    #[error("Failed to serialize package.json")]
    Manifest(#[from] serde_json::Error),

    /// The database prompt could not read input
    #[error("Failed to read database choice")]
    Prompt(#[source] std::io::Error),

    /// Configuration sources could not be merged
    #[error("Invalid configuration")]
    Config(#[from] Box<figment::Error>),
}

/// Result alias for generation steps
pub type Result<T> = std::result::Result<T, GeneratorError>;
