use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Health {
    pub status: String,
    pub message: String,
    /// RFC 3339, millisecond precision.
    pub timestamp: String,
}

impl Health {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Body of `GET /api/ping`; timestamp is epoch millis.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ping {
    pub message: String,
    pub timestamp: i64,
}

impl Ping {
    pub fn now(message: impl Into<String>) -> Self {
        Self { message: message.into(), timestamp: Utc::now().timestamp_millis() }
    }
}
