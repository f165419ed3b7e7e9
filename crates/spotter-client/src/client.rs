//! The authenticated facade over the remote sighting service.
//!
//! All operations share one response-classification policy, applied in
//! order: missing session (checked before any request is built), transport
//! failure, 401 on authenticated calls, any other non-2xx, missing body,
//! decode failure. Each call issues at most one network request and returns
//! exactly one result.

use crate::config::ClientConfig;
use crate::image::ImageFetcher;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use image::DynamicImage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use spotter_core::{
    ApiError, Credentials, Result, Session, SessionStore, SightingDetail, SightingSummary,
};
use std::sync::Arc;

const SIGNUP_PATH: &str = "users/signup";
const LOGIN_PATH: &str = "users/login";
const SIGHTINGS_PATH: &str = "animals/all";

/// Client for the sighting service.
///
/// The session store is injected and shared: any number of consumers may
/// hold the same store, and only a successful [`ApiClient::authenticate`]
/// writes to it.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    sessions: Arc<SessionStore>,
    images: ImageFetcher,
}

impl ApiClient {
    /// Creates a client talking to the configured endpoint over HTTP.
    pub fn new(config: ClientConfig, sessions: Arc<SessionStore>) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(config.base_url)), sessions)
    }

    /// Creates a client over an injected transport.
    pub fn with_transport(transport: Arc<dyn Transport>, sessions: Arc<SessionStore>) -> Self {
        let images = ImageFetcher::new(Arc::clone(&transport));
        Self {
            transport,
            sessions,
            images,
        }
    }

    /// Creates a new account. Does not touch the session store.
    ///
    /// A 2xx answer is success; the response body is ignored entirely.
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        let body = Self::encode_body(credentials)?;
        let request = ApiRequest::post(SIGNUP_PATH)
            .header("Content-Type", "application/json")
            .body(body);

        self.issue(request, false).await?;
        Ok(())
    }

    /// Logs in and stores the issued session.
    ///
    /// On a 2xx answer whose body does not decode into a [`Session`], the
    /// store is left untouched and the call fails with `NoDecode`.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<()> {
        let body = Self::encode_body(credentials)?;
        let request = ApiRequest::post(LOGIN_PATH)
            .header("Content-Type", "application/json")
            .body(body);

        let response = self.issue(request, false).await?;
        let session: Session = Self::decode_body(&response)?;
        self.sessions.set_session(session).await;
        Ok(())
    }

    /// Lists all reported sightings, in server order.
    pub async fn list_sightings(&self) -> Result<Vec<SightingSummary>> {
        let session = self.require_session().await?;
        let request = ApiRequest::get(SIGHTINGS_PATH).header(
            "Authorization",
            format!("Bearer {}", session.token),
        );

        let response = self.issue(request, true).await?;
        let names: Vec<String> = Self::decode_body(&response)?;
        Ok(names.into_iter().map(SightingSummary::from).collect())
    }

    /// Fetches the full record for one sighting, looked up by name.
    ///
    /// The name is interpolated into the path as-is; the service defines no
    /// escaping for names carrying path-delimiting characters.
    pub async fn fetch_detail(&self, name: &str) -> Result<SightingDetail> {
        let session = self.require_session().await?;
        let request = ApiRequest::get(format!("animal/{name}")).header(
            "Authorization",
            format!("Bearer {}", session.token),
        );

        let response = self.issue(request, true).await?;
        Self::decode_body(&response)
    }

    /// Downloads and decodes a sighting photo from an absolute URL.
    pub async fn fetch_image(&self, url: &str) -> Result<DynamicImage> {
        self.images.fetch(url).await
    }

    /// Fails with `NoAuth` before any request is constructed.
    async fn require_session(&self) -> Result<Session> {
        self.sessions.current_session().await.ok_or(ApiError::NoAuth)
    }

    /// Issues one request and classifies status-level outcomes.
    async fn issue(&self, request: ApiRequest, authenticated: bool) -> Result<ApiResponse> {
        let path = request.path.clone();
        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::warn!("Transport failure for {}: {}", path, e);
            ApiError::transport(e.to_string())
        })?;

        if authenticated && response.status == 401 {
            tracing::warn!("Session rejected by {}", path);
            return Err(ApiError::BadAuth);
        }
        if !response.is_success() {
            tracing::warn!("{} answered status {}", path, response.status);
            return Err(ApiError::status(response.status));
        }
        Ok(response)
    }

    /// Encodes an outgoing JSON body; failure is surfaced as a value
    /// without any network call.
    fn encode_body<T: Serialize>(value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| ApiError::Other {
            status: None,
            message: format!("failed to encode request body: {e}"),
        })
    }

    /// Decodes a successful response body into the expected shape.
    fn decode_body<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
        if response.body.is_empty() {
            return Err(ApiError::BadData);
        }
        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::warn!("Undecodable response body: {}", e);
            ApiError::NoDecode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body_is_bad_data() {
        let response = ApiResponse {
            status: 200,
            body: Vec::new(),
        };

        let result: Result<Vec<String>> = ApiClient::decode_body(&response);
        assert_eq!(result, Err(ApiError::BadData));
    }

    #[test]
    fn test_decode_mismatched_body_is_no_decode() {
        let response = ApiResponse {
            status: 200,
            body: b"{\"unexpected\":true}".to_vec(),
        };

        let result: Result<Vec<String>> = ApiClient::decode_body(&response);
        assert!(matches!(result, Err(ApiError::NoDecode(_))));
    }

    #[test]
    fn test_encode_body_produces_wire_json() {
        let credentials = Credentials::new("jane", "hunter2");
        let body = ApiClient::encode_body(&credentials).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["username"], "jane");
        assert_eq!(value["password"], "hunter2");
    }
}
