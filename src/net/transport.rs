//! Authenticated HTTP transport.
//!
//! Every request built through [`ApiClient`] reads the credential slot at
//! dispatch time and carries `Authorization: Bearer <token>` when one is
//! stored. There is no retry and no token refresh: a rejected request comes
//! back to the caller as [`ApiError::Status`] and the caller decides whether
//! to log out.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::session::TokenStorage;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Whether the server refused the credential (401) or the role (403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// `Authorization` header value for `token`, or `None` when there is no
/// usable credential.
pub fn bearer_value(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Human-readable message from an error response body.
///
/// Prefers a JSON `message` field, then `error`, then the raw body.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(serde_json::Value::as_str) {
                return msg.to_owned();
            }
        }
    }
    body.trim().to_owned()
}

/// HTTP client bound to the API base address and a credential slot.
#[derive(Clone, Debug)]
pub struct ApiClient<S: TokenStorage> {
    config: ApiConfig,
    http: Client,
    credentials: S,
}

impl<S: TokenStorage> ApiClient<S> {
    pub fn new(config: ApiConfig, credentials: S) -> Self {
        Self { config, http: Client::new(), credentials }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Start a request to `path`, decorated with the stored credential.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(path));
        match bearer_value(self.credentials.load().as_deref()) {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the server answers with
    /// a non-success status, or the body is not the expected JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        send_json(self.request(Method::GET, path)).await
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        send_json(self.request(Method::POST, path).json(body)).await
    }

    /// `PUT path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        send_json(self.request(Method::PUT, path).json(body)).await
    }

    /// `DELETE path`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.request(Method::DELETE, path).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let resp = check_status(builder.send().await?).await?;
    Ok(resp.json::<T>().await?)
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), message: error_message(&body) })
}
