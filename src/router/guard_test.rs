use super::*;

const ANONYMOUS: AuthSnapshot = AuthSnapshot { has_token: false, is_admin: false };
const CUSTOMER: AuthSnapshot = AuthSnapshot { has_token: true, is_admin: false };
const ADMIN: AuthSnapshot = AuthSnapshot { has_token: true, is_admin: true };

fn requires(auth: bool, admin: bool) -> RouteRequirements {
    RouteRequirements { requires_auth: auth, requires_admin: admin }
}

// =============================================================
// evaluate: rule order
// =============================================================

#[test]
fn auth_route_without_token_redirects_to_login() {
    assert_eq!(evaluate("/cart", requires(true, false), ANONYMOUS), NavigationDecision::Redirect("/login"));
}

#[test]
fn admin_route_for_customer_redirects_to_products() {
    assert_eq!(evaluate("/orders", requires(true, true), CUSTOMER), NavigationDecision::Redirect("/products"));
}

#[test]
fn login_with_token_redirects_to_products() {
    assert_eq!(evaluate("/login", RouteRequirements::default(), CUSTOMER), NavigationDecision::Redirect("/products"));
}

#[test]
fn register_with_token_redirects_to_products() {
    assert_eq!(evaluate("/register", RouteRequirements::default(), ADMIN), NavigationDecision::Redirect("/products"));
}

#[test]
fn public_route_without_token_proceeds() {
    assert_eq!(evaluate("/register", requires(false, false), ANONYMOUS), NavigationDecision::Proceed);
    assert_eq!(evaluate("/login", requires(false, false), ANONYMOUS), NavigationDecision::Proceed);
}

#[test]
fn admin_route_without_token_prefers_login_redirect() {
    assert_eq!(evaluate("/add-product", requires(true, true), ANONYMOUS), NavigationDecision::Redirect("/login"));
}

#[test]
fn admin_only_requirement_without_auth_flag_redirects_to_products() {
    assert_eq!(evaluate("/reports", requires(false, true), ANONYMOUS), NavigationDecision::Redirect("/products"));
}

#[test]
fn admin_route_for_admin_proceeds() {
    assert_eq!(evaluate("/orders", requires(true, true), ADMIN), NavigationDecision::Proceed);
}

#[test]
fn auth_route_with_token_proceeds() {
    assert_eq!(evaluate("/cart", requires(true, false), CUSTOMER), NavigationDecision::Proceed);
}

#[test]
fn token_without_identity_is_not_admin() {
    // A token whose claims never decoded: authenticated, no role.
    let undecoded = AuthSnapshot { has_token: true, is_admin: false };
    assert_eq!(evaluate("/profile", requires(true, false), undecoded), NavigationDecision::Proceed);
    assert_eq!(evaluate("/orders", requires(true, true), undecoded), NavigationDecision::Redirect("/products"));
}

#[test]
fn exactly_one_outcome_for_every_combination() {
    let paths = ["/login", "/register", "/products", "/orders"];
    let sessions = [ANONYMOUS, CUSTOMER, ADMIN];
    for path in paths {
        for session in sessions {
            for (auth, admin) in [(false, false), (true, false), (false, true), (true, true)] {
                let decision = evaluate(path, requires(auth, admin), session);
                assert!(matches!(
                    decision,
                    NavigationDecision::Proceed
                        | NavigationDecision::Redirect("/login")
                        | NavigationDecision::Redirect("/products")
                ));
                assert_eq!(decision, evaluate(path, requires(auth, admin), session));
            }
        }
    }
}

// =============================================================
// check: route-table lookup
// =============================================================

#[test]
fn check_uses_declared_requirements() {
    assert_eq!(check("/products/17", ANONYMOUS), NavigationDecision::Redirect("/login"));
    assert_eq!(check("/edit-product/17", CUSTOMER), NavigationDecision::Redirect("/products"));
    assert_eq!(check("/edit-product/17", ADMIN), NavigationDecision::Proceed);
    assert_eq!(check("/my-orders", CUSTOMER), NavigationDecision::Proceed);
}

#[test]
fn check_root_follows_landing_requirements() {
    assert_eq!(check("/", ANONYMOUS), NavigationDecision::Redirect("/login"));
    assert_eq!(check("/", CUSTOMER), NavigationDecision::Proceed);
}

#[test]
fn check_trailing_slash_on_login_still_redirects_signed_in_users() {
    assert_eq!(check("/login/", CUSTOMER), NavigationDecision::Redirect("/products"));
}

#[test]
fn check_unknown_path_proceeds() {
    assert_eq!(check("/no-such-page", ANONYMOUS), NavigationDecision::Proceed);
}
