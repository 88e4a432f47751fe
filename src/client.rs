//! HTTP client for the `/dog` endpoint.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::payload::DogResponse;
use crate::{Error, Result, ViewerConfig};

/// A failed `/dog` request: transport error, timeout, non-2xx status, or a
/// 2xx body without a usable dog.
///
/// `payload` holds whatever could be parsed out of the response body; the
/// status panel renders from it.
#[derive(Error, Debug, Clone)]
#[error("Request failed: {reason}")]
pub struct RequestFailure {
    pub status: Option<u16>,
    pub reason: String,
    pub payload: Option<DogResponse>,
}

impl RequestFailure {
    fn transport(reason: String) -> Self {
        Self {
            status: None,
            reason,
            payload: None,
        }
    }
}

/// A successful fetch: the media URL to display and the payload it came with.
#[derive(Debug, Clone)]
pub struct FetchedDog {
    pub url: String,
    pub payload: DogResponse,
}

pub struct DogClient {
    client: Client,
    endpoint: Url,
}

impl DogClient {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let endpoint = config.dog_url()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        if !config.headers.is_empty() {
            let mut headers = reqwest::header::HeaderMap::new();
            for (name, value) in &config.headers {
                let name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| Error::ConfigError(format!("Invalid header name {}: {}", name, e)))?;
                let value = reqwest::header::HeaderValue::from_str(value)
                    .map_err(|e| Error::ConfigError(format!("Invalid header value for {}: {}", name, e)))?;
                headers.insert(name, value);
            }
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|e| {
            Error::InitializationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch one dog.
    pub async fn fetch(&self) -> std::result::Result<FetchedDog, RequestFailure> {
        debug!("GET {}", self.endpoint);

        let resp = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| RequestFailure::transport(format!("Failed to fetch {}: {}", self.endpoint, e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| RequestFailure {
                status: Some(status.as_u16()),
                reason: format!("Failed to read response body: {}", e),
                payload: None,
            })?;
        let payload = DogResponse::parse(&body);

        if !status.is_success() {
            warn!("{} answered {}", self.endpoint, status);
            return Err(RequestFailure {
                status: Some(status.as_u16()),
                reason: format!("HTTP {}", status),
                payload,
            });
        }

        match payload {
            Some(p) => match p.media_url().map(str::to_string) {
                Some(url) => Ok(FetchedDog { url, payload: p }),
                None => Err(RequestFailure {
                    status: Some(status.as_u16()),
                    reason: "Response has no dog url".to_string(),
                    payload: Some(p),
                }),
            },
            None => Err(RequestFailure {
                status: Some(status.as_u16()),
                reason: "Response body is not a JSON object".to_string(),
                payload: None,
            }),
        }
    }
}
