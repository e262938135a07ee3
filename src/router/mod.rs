//! Client-side routing: the route table and the authorization guard.
//!
//! DESIGN
//! ======
//! `routes` declares what each path requires; `guard` decides, from those
//! requirements and a session snapshot, whether a navigation proceeds or is
//! redirected. Both are pure so they can be tested without a browser.

pub mod guard;
pub mod routes;

pub use guard::{NavigationDecision, RouteRequirements, check, evaluate};
