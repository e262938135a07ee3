//! Durable slot holding the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build keeps the token in `localStorage` so it survives
//! reloads. Tabs share the slot with no locking; last write wins. Native
//! builds and tests use [`MemoryStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// A single named slot holding the bearer token as a string.
///
/// Implementations never fail loudly: a slot that cannot be read reads as
/// empty, and failed writes are logged and dropped.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Browser `localStorage` slot under [`TOKEN_KEY`].
///
/// Inert outside the `csr` build: loads nothing, stores nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist token to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    log::warn!("failed to remove token from localStorage");
                }
            }
        }
    }
}

/// In-memory slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with `token`, as if persisted by an earlier session.
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.save(token);
        storage
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut Option<String>) -> R) -> R {
        // A poisoned slot still holds a usable string.
        let mut guard = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.with_slot(|slot| slot.clone())
    }

    fn save(&self, token: &str) {
        self.with_slot(|slot| *slot = Some(token.to_owned()));
    }

    fn remove(&self) {
        self.with_slot(|slot| *slot = None);
    }
}
