//! Shared sign-in step for the login and registration pages.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

#[cfg(any(test, feature = "csr"))]
use crate::session::{SessionStore, TokenStorage};

/// Store a freshly issued `token` in the session.
///
/// Returns a user-facing warning when the token's claims cannot be decoded.
/// The token stays stored either way, so the session reads as signed in but
/// without an identity; the route gate moves the user on regardless.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn accept_token<S: TokenStorage>(session: &mut SessionStore<S>, token: &str) -> Option<String> {
    session
        .set_token(token)
        .err()
        .map(|e| format!("Signed in, but the session token could not be read: {e}"))
}
