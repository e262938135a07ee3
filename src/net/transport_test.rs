use super::*;
use crate::session::MemoryStorage;

fn client(storage: MemoryStorage) -> ApiClient<MemoryStorage> {
    ApiClient::new(ApiConfig::from_value(Some("https://shop.example.test/api")), storage)
}

fn auth_header(req: &reqwest::Request) -> Option<&str> {
    req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}

// =============================================================
// Request decoration
// =============================================================

#[test]
fn request_carries_bearer_token_when_stored() {
    let api = client(MemoryStorage::with_token("abc.def.ghi"));
    let req = api.request(Method::GET, "/products").build().unwrap();
    assert_eq!(auth_header(&req), Some("Bearer abc.def.ghi"));
}

#[test]
fn request_has_no_authorization_without_token() {
    let api = client(MemoryStorage::new());
    let req = api.request(Method::GET, "/products").build().unwrap();
    assert!(req.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn request_reads_slot_at_dispatch_time() {
    let storage = MemoryStorage::new();
    let api = client(storage.clone());

    storage.save("first.token.value");
    let first = api.request(Method::GET, "/cart").build().unwrap();
    assert_eq!(auth_header(&first), Some("Bearer first.token.value"));

    storage.remove();
    let second = api.request(Method::GET, "/cart").build().unwrap();
    assert!(second.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn request_joins_base_url_and_keeps_method() {
    let api = client(MemoryStorage::new());
    let req = api.request(Method::DELETE, "products/7").build().unwrap();
    assert_eq!(req.method(), &Method::DELETE);
    assert_eq!(req.url().as_str(), "https://shop.example.test/api/products/7");
}

// =============================================================
// bearer_value
// =============================================================

#[test]
fn bearer_value_formats_token() {
    assert_eq!(bearer_value(Some("abc.def.ghi")).as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn bearer_value_skips_missing_or_empty_token() {
    assert_eq!(bearer_value(None), None);
    assert_eq!(bearer_value(Some("")), None);
}

// =============================================================
// Error surface
// =============================================================

#[test]
fn error_message_prefers_message_then_error_then_body() {
    assert_eq!(error_message(r#"{"message":"m1","error":"m2"}"#), "m1");
    assert_eq!(error_message(r#"{"error":"m2"}"#), "m2");
    assert_eq!(error_message("  plain failure \n"), "plain failure");
    assert_eq!(error_message(r#"{"status":500}"#), r#"{"status":500}"#);
}

#[test]
fn status_errors_classify_unauthorized() {
    let unauthorized = ApiError::Status { status: 401, message: "expired".to_owned() };
    let forbidden = ApiError::Status { status: 403, message: "admins only".to_owned() };
    let missing = ApiError::Status { status: 404, message: "no such product".to_owned() };

    assert!(unauthorized.is_unauthorized());
    assert!(forbidden.is_unauthorized());
    assert!(!missing.is_unauthorized());
    assert_eq!(missing.status(), Some(404));
}

#[test]
fn status_error_display_includes_code_and_message() {
    let err = ApiError::Status { status: 401, message: "expired".to_owned() };
    assert_eq!(err.to_string(), "server responded 401: expired");
}
