//! Random Dog viewer
//!
//! A client for the random dog demo: pressing the "new dog" button issues a
//! `GET /dog`, and the response (an image or video URL plus the breaker's
//! debug status) is rendered into a small page model that can be dumped as
//! HTML or summarized as text.
//!
//! # Example
//!
//! ```no_run
//! use dogviewer::{ViewerConfig, Viewport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ViewerConfig {
//!     endpoint: "http://localhost:8000".to_string(),
//!     viewport: Viewport { width: 1280, height: 900 },
//!     ..Default::default()
//! };
//!
//! let viewer = dogviewer::new_viewer(config)?;
//! viewer.request_new_dog().await;
//! let snapshot = viewer.render_text_snapshot()?;
//! println!("Showing: {}", snapshot.url);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use url::Url;

pub mod client;
pub mod error;
pub mod payload;
pub mod rendering;
pub mod status;
pub mod viewer;

pub use client::{DogClient, FetchedDog, RequestFailure};
pub use error::{Error, Result};
pub use payload::{BreakerInfo, Dog, DogResponse, Status};
pub use rendering::Page;
pub use status::{StatusCategory, StatusIcon, UiState};
pub use viewer::{DogViewer, Outcome};

/// Configuration for the viewer
///
/// The defaults point at a demo server on localhost and leave requests
/// without a timeout: a request that never completes leaves the page as it
/// was.
///
/// # Examples
///
/// ```
/// let cfg = dogviewer::ViewerConfig::default();
/// assert_eq!(cfg.dog_path, "/dog");
/// assert_eq!(cfg.timeout_ms, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Base URL of the demo server
    pub endpoint: String,
    /// Path of the dog endpoint, joined onto `endpoint`
    pub dog_path: String,
    /// Image shown when a request fails
    pub error_image: String,
    /// Spinner shown in the status icon while a request is in flight
    pub loader_image: String,
    /// User agent string to send with requests
    pub user_agent: String,
    /// Custom HTTP headers
    pub headers: HashMap<String, String>,
    /// Viewport dimensions, used to fit tall images
    pub viewport: Viewport,
    /// Request timeout in milliseconds (0 => no timeout)
    pub timeout_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000".to_string(),
            dog_path: "/dog".to_string(),
            error_image: "images/error-peanut.jpg".to_string(),
            loader_image: "images/ajax-loader.gif".to_string(),
            user_agent: concat!("dogviewer/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: HashMap::new(),
            viewport: Viewport::default(),
            timeout_ms: 0,
        }
    }
}

impl ViewerConfig {
    /// Full URL of the dog endpoint.
    pub fn dog_url(&self) -> Result<Url> {
        let base = Url::parse(&self.endpoint)
            .map_err(|e| Error::ConfigError(format!("Invalid endpoint {}: {}", self.endpoint, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "Endpoint {} cannot be used as a base URL",
                self.endpoint
            )));
        }
        base.join(&self.dog_path)
            .map_err(|e| Error::ConfigError(format!("Invalid path {}: {}", self.dog_path, e)))
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// A textual snapshot of the rendered page
///
/// Returned by `DogViewer::render_text_snapshot`; handy for tests and for the
/// CLI's output.
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    /// Page title
    pub title: String,
    /// Extracted text content
    pub text: String,
    /// URL of the media currently displayed (empty before the first response)
    pub url: String,
}

/// Create a viewer for the given configuration
pub fn new_viewer(config: ViewerConfig) -> Result<DogViewer> {
    DogViewer::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.viewport.width, 1280);
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.error_image, "images/error-peanut.jpg");
        assert_eq!(config.dog_url().unwrap().as_str(), "http://127.0.0.1:8000/dog");
    }

    #[test]
    fn test_dog_url_joins_path() {
        let config = ViewerConfig {
            endpoint: "http://example.com/demo/".to_string(),
            dog_path: "dog".to_string(),
            ..Default::default()
        };
        assert_eq!(config.dog_url().unwrap().as_str(), "http://example.com/demo/dog");
    }

    #[test]
    fn test_bad_endpoint() {
        let config = ViewerConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.dog_url(), Err(Error::ConfigError(_))));

        let config = ViewerConfig {
            endpoint: "mailto:dogs@example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.dog_url(), Err(Error::ConfigError(_))));
    }
}
