//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Authorization is decided by the route gate before any page renders; pages
//! only read the session and feed tokens into it.

pub mod login;
pub mod profile;
pub mod register;
pub mod section;
mod sign_in;
