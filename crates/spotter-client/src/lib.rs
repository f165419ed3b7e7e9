//! Authenticated client for the AnimalSpotter sighting service.
//!
//! [`ApiClient`] is the single facade: register, authenticate, list
//! sightings, fetch per-sighting detail, fetch photos. Presentation code
//! consumes it through plain async calls and owns its own UI marshaling.

pub mod client;
pub mod config;
pub mod image;
pub mod transport;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use crate::image::ImageFetcher;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport, TransportError};

// Re-export the domain types callers handle directly.
pub use spotter_core::{
    ApiError, Credentials, Result, Session, SessionStore, SightingDetail, SightingSummary,
};
