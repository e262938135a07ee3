//! Client-side authentication session.
//!
//! DESIGN
//! ======
//! `claims` is the pure token decoder, `storage` abstracts the durable
//! browser slot, and `store` owns the token/identity pair built on both.

pub mod claims;
pub mod storage;
pub mod store;

pub use claims::{DecodeError, Identity, decode_identity};
pub use storage::{BrowserStorage, MemoryStorage, TOKEN_KEY, TokenStorage};
pub use store::{AuthSnapshot, SessionStore};
