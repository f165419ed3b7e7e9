//! Client configuration.
//!
//! The service lives at a fixed endpoint; the only knob is the base URL,
//! overridable through the `SPOTTER_BASE_URL` environment variable.

use std::env;

/// The production endpoint of the sighting service.
pub const DEFAULT_BASE_URL: &str = "https://lambdaanimalspotter.vapor.cloud/api";

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint all request paths are joined against.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Loads the configuration from the environment.
    ///
    /// `SPOTTER_BASE_URL` overrides the production endpoint when set.
    pub fn from_env() -> Self {
        let base_url =
            env::var("SPOTTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}
