use super::*;

#[test]
fn from_value_defaults_when_absent() {
    assert_eq!(ApiConfig::from_value(None).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_value_defaults_when_blank() {
    assert_eq!(ApiConfig::from_value(Some("   ")).base_url, DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::from_value(Some("/")).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_value_trims_whitespace_and_trailing_slashes() {
    let cfg = ApiConfig::from_value(Some(" https://shop.example.test/api// "));
    assert_eq!(cfg.base_url, "https://shop.example.test/api");
}

#[test]
fn url_joins_with_single_slash() {
    let cfg = ApiConfig::from_value(Some("https://shop.example.test/api/"));
    assert_eq!(cfg.url("/products"), "https://shop.example.test/api/products");
    assert_eq!(cfg.url("cart"), "https://shop.example.test/api/cart");
}

#[test]
fn default_matches_default_constant() {
    assert_eq!(ApiConfig::default(), ApiConfig::from_value(None));
}
