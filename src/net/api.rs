//! Typed calls for the auth endpoints that hand out bearer tokens.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] so pages can show the server's message
//! without crashing; nothing here touches the session store.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use super::transport::{ApiClient, ApiError};
use crate::session::TokenStorage;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login<S: TokenStorage>(api: &ApiClient<S>, email: &str, password: &str) -> Result<String, ApiError> {
    let body: TokenResponse = api.post_json(LOGIN_ENDPOINT, &LoginRequest { email, password }).await?;
    Ok(body.token)
}

/// Create an account and receive its bearer token via `POST /auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server refuses the registration.
pub async fn register<S: TokenStorage>(
    api: &ApiClient<S>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    let body: TokenResponse = api
        .post_json(REGISTER_ENDPOINT, &RegisterRequest { name, email, password })
        .await?;
    Ok(body.token)
}
