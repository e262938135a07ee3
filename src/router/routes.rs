//! Route table for the store front-end.
//!
//! Paths use `:name` for a single dynamic segment. Unknown paths carry no
//! requirements; the router renders its fallback for them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use super::guard::RouteRequirements;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Default page for authenticated users; `/` redirects here.
pub const LANDING_PATH: &str = "/products";

/// A declared route and what it requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub requirements: RouteRequirements,
}

const PUBLIC: RouteRequirements = RouteRequirements { requires_auth: false, requires_admin: false };
const SIGNED_IN: RouteRequirements = RouteRequirements { requires_auth: true, requires_admin: false };
const ADMIN: RouteRequirements = RouteRequirements { requires_auth: true, requires_admin: true };

pub static ROUTES: &[RouteDef] = &[
    RouteDef { path: REGISTER_PATH, name: "Register", requirements: PUBLIC },
    RouteDef { path: LOGIN_PATH, name: "Login", requirements: PUBLIC },
    RouteDef { path: LANDING_PATH, name: "Products", requirements: SIGNED_IN },
    RouteDef { path: "/products/:id", name: "ProductDetails", requirements: SIGNED_IN },
    RouteDef { path: "/cart", name: "Cart", requirements: SIGNED_IN },
    // Order history across all customers.
    RouteDef { path: "/orders", name: "Orders", requirements: ADMIN },
    RouteDef { path: "/my-orders", name: "MyOrders", requirements: SIGNED_IN },
    RouteDef { path: "/profile", name: "Profile", requirements: SIGNED_IN },
    RouteDef { path: "/add-product", name: "AddProduct", requirements: ADMIN },
    RouteDef { path: "/edit-product/:id", name: "EditProduct", requirements: ADMIN },
];

/// Normalize `path`: drop one trailing slash and resolve the `/` alias.
pub fn canonical_path(path: &str) -> &str {
    let trimmed = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
    if trimmed.is_empty() || trimmed == "/" { LANDING_PATH } else { trimmed }
}

/// Look up the route declaring `path`.
pub fn find(path: &str) -> Option<&'static RouteDef> {
    let path = canonical_path(path);
    ROUTES.iter().find(|route| matches_pattern(route.path, path))
}

/// Requirements for `path`; unknown paths require nothing.
pub fn requirements_for(path: &str) -> RouteRequirements {
    find(path).map_or_else(RouteRequirements::default, |route| route.requirements)
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    let mut expected = pattern.split('/');
    let mut actual = path.split('/');
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) => {
                let ok = if want.starts_with(':') { !got.is_empty() } else { want == got };
                if !ok {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
