//! Domain records exchanged with the sighting service.
//!
//! Field renames mirror the wire schema exactly; everything else follows
//! Rust naming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A username/password pair for register and login attempts.
///
/// Transient by design: constructed per attempt and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// The server-issued bearer credential that authorizes subsequent requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
}

/// The minimal listing record: one sighting identified by name.
///
/// The list endpoint returns a bare JSON array of name strings; the name
/// doubles as the lookup key for [`SightingDetail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SightingSummary {
    pub name: String,
}

impl From<String> for SightingSummary {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// One reported animal observation in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingDetail {
    pub id: i64,
    pub name: String,
    /// When the animal was observed. The wire carries epoch seconds under
    /// the key `timeSeen`.
    #[serde(rename = "timeSeen", with = "chrono::serde::ts_seconds")]
    pub observed_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}
