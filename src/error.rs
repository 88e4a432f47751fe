//! Error types for the dog viewer

use thiserror::Error;

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or driving the viewer
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to initialize the HTTP client
    #[error("Viewer initialization failed: {0}")]
    InitializationError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to render the page
    #[error("Rendering failed: {0}")]
    RenderError(String),
}
