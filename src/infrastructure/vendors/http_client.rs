//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for vendor integrations.
//!
//! Wraps `reqwest` with the cross-cutting concerns every vendor call needs:
//! a bearer credential sent as a default header, a request timeout, JSON
//! decoding, and mapping of transport failures onto
//! [`VendorError`] variants.

use crate::infrastructure::vendors::error::{VendorError, VendorResult};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for vendor clients.
///
/// The bearer credential is installed as a default header at construction
/// and marked sensitive so it never appears in debug output. The client is
/// cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client that authenticates every request with the given
    /// bearer credential.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Internal` if the credential is not a valid
    /// header value or the client cannot be created.
    pub fn with_bearer(timeout_ms: u64, token: &str) -> VendorResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| VendorError::internal(format!("invalid bearer credential: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| VendorError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and decodes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Timeout` or `VendorError::Connection` if the
    /// request fails, a status-classified error for non-success responses,
    /// and `VendorError::Malformed` if the body cannot be decoded.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> VendorResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Checks the response status and decodes the JSON body.
async fn handle_response<T: DeserializeOwned>(response: Response) -> VendorResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| VendorError::malformed(format!("failed to decode response: {e}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

/// Maps a reqwest error to a [`VendorError`].
fn map_reqwest_error(error: reqwest::Error) -> VendorError {
    if error.is_timeout() {
        VendorError::timeout("request timed out")
    } else if error.is_connect() {
        VendorError::connection(format!("connection failed: {error}"))
    } else {
        VendorError::connection(format!("request failed: {error}"))
    }
}

/// Maps a non-success HTTP status to a [`VendorError`].
fn map_status_error(status: StatusCode, body: &str) -> VendorError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            VendorError::authentication(format!("credential rejected ({status}): {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => VendorError::rate_limited("rate limit exceeded"),
        _ => VendorError::status(status.as_u16(), body.to_string()),
    }
}
