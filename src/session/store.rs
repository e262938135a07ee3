//! Session store: the current bearer token and the identity derived from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at application start via [`SessionStore::restore`] and
//! provided to the route guard and pages through Leptos context. The
//! transport reads the same durable slot directly on every request.
//!
//! INVARIANTS
//! ==========
//! - `identity` is only ever set from a successful decode of `token`.
//! - Clearing removes the token, the identity, and the persisted slot together.
//! - `set_token` with undecodable claims keeps the token and drops the
//!   identity; `restore` clears instead.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::claims::{DecodeError, Identity, decode_identity};
use super::storage::TokenStorage;

/// Authentication facts the route guard needs, detached from the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub has_token: bool,
    pub is_admin: bool,
}

/// Single source of truth for who is logged in and with what role.
#[derive(Clone, Debug)]
pub struct SessionStore<S: TokenStorage> {
    storage: S,
    token: Option<String>,
    identity: Option<Identity>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Build the store from whatever token `storage` already holds.
    ///
    /// A persisted token whose claims cannot be decoded is discarded, both
    /// in memory and in `storage`.
    pub fn restore(storage: S) -> Self {
        let mut store = Self { storage, token: None, identity: None };
        let Some(token) = store.storage.load() else {
            return store;
        };
        match decode_identity(&token) {
            Ok(identity) => {
                store.token = Some(token);
                store.identity = Some(identity);
            }
            Err(e) => {
                log::warn!("discarding persisted token: {e}");
                store.clear_token();
            }
        }
        store
    }

    /// Persist `token` and derive the identity from its claims.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Empty`] without touching state when `token` is
    /// empty. Any other decode failure is returned after the token has been
    /// persisted: the session then holds a token with no identity, so it reads
    /// as authenticated but never as admin.
    pub fn set_token(&mut self, token: &str) -> Result<&Identity, DecodeError> {
        if token.is_empty() {
            return Err(DecodeError::Empty);
        }
        self.storage.save(token);
        self.token = Some(token.to_owned());

        match decode_identity(token) {
            Ok(identity) => {
                log::debug!("session identity decoded: id={:?} admin={}", identity.id, identity.is_admin);
                Ok(&*self.identity.insert(identity))
            }
            Err(e) => {
                log::error!("failed to decode token: {e}");
                self.identity = None;
                Err(e)
            }
        }
    }

    /// Forget the token and identity and remove the persisted slot.
    pub fn clear_token(&mut self) {
        self.token = None;
        self.identity = None;
        self.storage.remove();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role flag of the decoded identity; `false` when there is none.
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.is_admin)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot { has_token: self.is_authenticated(), is_admin: self.is_admin() }
    }
}
