//! Debug detail panel contents.
//!
//! Known payload fields get a fixed, readable layout; anything the viewer
//! doesn't know about is listed as `key: value` after them.

use serde_json::Value;

use crate::payload::DogResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub key: String,
    pub value: String,
}

impl DetailLine {
    fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for DetailLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

pub fn detail_lines(payload: &DogResponse) -> Vec<DetailLine> {
    let mut lines = Vec::new();

    if let Some(status) = &payload.status {
        lines.push(DetailLine::new("status", status.as_str()));
    }
    if let Some(url) = payload.media_url() {
        lines.push(DetailLine::new("dog", url));
    }

    if let Some(cb) = payload.breaker() {
        if let Some(key) = &cb.key {
            lines.push(DetailLine::new("breaker", key.as_str()));
        }
        lines.push(DetailLine::new("breaker state", cb.state_label()));
        match (cb.failures, cb.max_failures) {
            (Some(f), Some(max)) => lines.push(DetailLine::new("failures", format!("{} / {}", f, max))),
            (Some(f), None) => lines.push(DetailLine::new("failures", f.to_string())),
            (None, Some(max)) => lines.push(DetailLine::new("max failures", max.to_string())),
            (None, None) => {}
        }
        if let Some(timeout) = cb.timeout {
            lines.push(DetailLine::new("timeout", format!("{}s", timeout)));
        }
        lines.push(DetailLine::new(
            "jitter",
            cb.jitter.map(|j| format!("{}s", j)).unwrap_or_else(|| "none".to_string()),
        ));
        if let Some(checkin) = cb.checkin {
            lines.push(DetailLine::new("checkin", checkin.to_string()));
        }
    } else if let Some(raw) = payload.cb.as_ref().filter(|v| !v.is_null()) {
        lines.push(DetailLine::new("cb", value_text(raw)));
    }

    let mut extra: Vec<_> = payload.extra.iter().collect();
    extra.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in extra {
        lines.push(DetailLine::new(key, value_text(value)));
    }

    lines
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
