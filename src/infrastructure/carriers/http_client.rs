//! # HTTP Client Utilities
//!
//! Shared HTTP client for shipping provider adapters.
//!
//! Wraps `reqwest` with a request timeout, optional HTTP basic auth and
//! translation of non-2xx responses into [`ProviderError`]s. Provider error
//! bodies of the form `{"error": {"code": .., "message": ..}}` are parsed so
//! the caller sees the provider's own message.
//!
//! # Examples
//!
//! ```ignore
//! use parcel_rates::infrastructure::carriers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?.with_basic_auth("EZTK...");
//! let response: MyResponse = client.post("https://api.example.com/shipments", &body).await?;
//! ```

use crate::infrastructure::carriers::error::{ProviderError, ProviderResult};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Error envelope returned by the provider on failure.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client wrapper for provider adapters.
#[derive(Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
    /// Basic auth user name; the password is empty.
    api_key: Option<String>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout_ms", &self.timeout_ms)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ProviderError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout_ms,
            api_key: None,
        })
    }

    /// Authenticates every request with `api_key` as the basic auth user.
    #[must_use]
    pub fn with_basic_auth(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns true if requests carry credentials.
    #[inline]
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes a POST request with JSON body and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, a status-derived error
    /// for non-2xx responses, or `ProviderError::Protocol` if the body cannot
    /// be parsed.
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> ProviderResult<T> {
        let response = self
            .authorize(self.client.post(url))
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.basic_auth(key, Some("")),
            None => request,
        }
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ProviderResult<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ProviderError::protocol(format!("Failed to parse response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a ProviderError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            ProviderError::connection(format!("Connection failed: {}", error))
        } else {
            ProviderError::connection(format!("HTTP request failed: {}", error))
        }
    }
}

/// Maps an HTTP status code and body to a ProviderError.
fn map_status_error(status: StatusCode, body: &str) -> ProviderError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let code = parsed.as_ref().and_then(|e| e.error.code.clone());
    let message = parsed
        .and_then(|e| e.error.message)
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body));

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => match code {
            Some(code) => ProviderError::invalid_request_with_code(message, code),
            None => ProviderError::invalid_request(message),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::authentication(message),
        StatusCode::NOT_FOUND => ProviderError::not_found(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited(message),
        s if s.is_server_error() => {
            ProviderError::connection(format!("Server error ({}): {}", status, message))
        }
        _ => ProviderError::protocol(format!("HTTP error ({}): {}", status, message)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = HttpClient::new(5000).unwrap();
        assert_eq!(client.timeout_ms(), 5000);
        assert!(!client.has_credentials());
    }

    #[test]
    fn debug_redacts_key() {
        let client = HttpClient::new(5000).unwrap().with_basic_auth("secret_key");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret_key"));
        assert!(client.has_credentials());
    }

    #[test]
    fn parses_provider_error_body() {
        let body = r#"{"error":{"code":"ADDRESS.VERIFY.FAILURE","message":"Address not found"}}"#;
        let error = map_status_error(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert!(error.is_client_error());
        assert_eq!(error.message(), "Address not found");
        assert_eq!(error.error_code(), Some("ADDRESS.VERIFY.FAILURE"));
    }

    #[test]
    fn maps_statuses() {
        assert!(map_status_error(StatusCode::UNAUTHORIZED, "").is_authentication());
        assert!(matches!(
            map_status_error(StatusCode::NOT_FOUND, ""),
            ProviderError::NotFound { .. }
        ));
        assert!(matches!(
            map_status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            ProviderError::RateLimited { .. }
        ));
        assert!(matches!(
            map_status_error(StatusCode::BAD_GATEWAY, "upstream"),
            ProviderError::Connection { .. }
        ));
        assert!(matches!(
            map_status_error(StatusCode::IM_A_TEAPOT, ""),
            ProviderError::Protocol { .. }
        ));
    }

    #[test]
    fn unparseable_body_kept_in_message() {
        let error = map_status_error(StatusCode::BAD_REQUEST, "plain text");
        assert!(error.message().contains("plain text"));
        assert_eq!(error.error_code(), None);
    }
}
