//! The `/dog` response body.
//!
//! Only the fields the page renders are typed; everything else is kept in
//! `extra` so the detail panel can still list it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value of the `status` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Ok,
    Error,
    BreakerOpen,
    /// Anything the viewer doesn't recognize, kept verbatim.
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Ok => "ok",
            Status::Error => "error",
            Status::BreakerOpen => "breaker-open",
            Status::Other(s) => s,
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ok" => Status::Ok,
            "error" => Status::Error,
            "breaker-open" => Status::BreakerOpen,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dog {
    #[serde(default)]
    pub url: Option<String>,
}

/// Breaker state as reported by the demo server under `cb`.
///
/// The server encodes the breaker status as an integer: 0 is open, 1 is closed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BreakerInfo {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub failures: Option<u64>,
    #[serde(default)]
    pub max_failures: Option<u64>,
    #[serde(default)]
    pub timeout: Option<f64>,
    #[serde(default)]
    pub checkin: Option<f64>,
    #[serde(default)]
    pub jitter: Option<f64>,
}

pub const BREAKER_OPEN: i64 = 0;
pub const BREAKER_CLOSED: i64 = 1;

impl BreakerInfo {
    /// Human-readable breaker state.
    pub fn state_label(&self) -> &'static str {
        match self.status {
            Some(BREAKER_OPEN) => "OPEN",
            Some(BREAKER_CLOSED) => "CLOSED",
            _ => "UNKNOWN",
        }
    }
}

/// A `/dog` payload, from either a successful or a failed response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DogResponse {
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub dog: Option<Dog>,
    /// Breaker debug block, kept raw. See [`DogResponse::breaker`].
    #[serde(default)]
    pub cb: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DogResponse {
    /// Parse a response body. Bodies that aren't a JSON object yield `None`.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The media URL, if the payload carries one.
    pub fn media_url(&self) -> Option<&str> {
        self.dog
            .as_ref()
            .and_then(|d| d.url.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Typed view of `cb`. `None` when the block is absent or doesn't have
    /// the shape the demo server emits.
    pub fn breaker(&self) -> Option<BreakerInfo> {
        self.cb
            .as_ref()
            .filter(|v| !v.is_null())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
