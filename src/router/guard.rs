//! Route authorization guard.
//!
//! Evaluated on every navigation. The decision is a pure function of the
//! destination, its declared requirements, and the session snapshot; it never
//! fails, an unauthorized destination always resolves to a redirect.
//!
//! This is a UX convenience only. The server enforces authorization.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{LANDING_PATH, LOGIN_PATH, REGISTER_PATH, canonical_path, requirements_for};
use crate::session::AuthSnapshot;

/// Requirements a route declares. Both default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigating to `to` may proceed.
///
/// Rules, first match wins:
/// 1. login/register while holding a token -> landing page
/// 2. auth required without a token -> login
/// 3. admin required without the admin role -> landing page
/// 4. proceed
pub fn evaluate(to: &str, requirements: RouteRequirements, session: AuthSnapshot) -> NavigationDecision {
    if (to == LOGIN_PATH || to == REGISTER_PATH) && session.has_token {
        return NavigationDecision::Redirect(LANDING_PATH);
    }
    if requirements.requires_auth && !session.has_token {
        return NavigationDecision::Redirect(LOGIN_PATH);
    }
    if requirements.requires_admin && !session.is_admin {
        return NavigationDecision::Redirect(LANDING_PATH);
    }
    NavigationDecision::Proceed
}

/// Evaluate `path` against the requirements declared in the route table.
pub fn check(path: &str, session: AuthSnapshot) -> NavigationDecision {
    let to = canonical_path(path);
    evaluate(to, requirements_for(to), session)
}
