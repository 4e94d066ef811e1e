use super::*;
use crate::net::types::LoginRequest;
use crate::session::{MemoryStorage, UserType};

fn body(detail: Option<&str>, error: Option<&str>) -> ErrorBody {
    ErrorBody { detail: detail.map(str::to_owned), error: error.map(str::to_owned) }
}

// =============================================================
// classify_login_failure
// =============================================================

#[test]
fn bad_request_and_unauthorized_are_invalid_credentials() {
    for status in [400, 401] {
        let err = classify_login_failure(status, None);
        assert_eq!(err, LoginError::InvalidCredentials(INVALID_CREDENTIALS_MESSAGE.to_owned()));
        assert_eq!(err.title(), "Login Failed");
    }
}

#[test]
fn invalid_credentials_prefers_backend_detail() {
    let err = classify_login_failure(401, Some(&body(Some("No such LSC"), None)));
    assert_eq!(err.to_string(), "No such LSC");
}

#[test]
fn forbidden_is_access_denied() {
    let err = classify_login_failure(403, Some(&body(None, None)));
    assert_eq!(err.title(), "Access Denied");
    assert_eq!(err.to_string(), ACCESS_DENIED_MESSAGE);
}

#[test]
fn server_error_ignores_detail() {
    let err = classify_login_failure(500, Some(&body(Some("traceback..."), None)));
    assert_eq!(err, LoginError::Server);
    assert_eq!(err.title(), "Server Error");
    assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
}

#[test]
fn other_status_falls_back_through_detail_then_error() {
    assert_eq!(classify_login_failure(429, Some(&body(Some("slow down"), Some("rate")))).to_string(), "slow down");
    assert_eq!(classify_login_failure(429, Some(&body(None, Some("rate limited")))).to_string(), "rate limited");
    assert_eq!(classify_login_failure(502, None).to_string(), UNEXPECTED_MESSAGE);
}

#[test]
fn empty_detail_is_ignored() {
    let err = classify_login_failure(401, Some(&body(Some(""), None)));
    assert_eq!(err.to_string(), INVALID_CREDENTIALS_MESSAGE);
}

#[test]
fn connection_error_has_its_own_title() {
    assert_eq!(LoginError::Connection.title(), "Connection Error");
    assert_eq!(LoginError::Connection.to_string(), CONNECTION_ERROR_MESSAGE);
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn login_request_uses_camel_case_lsc_number() {
    let value = serde_json::to_value(LoginRequest { lsc_number: "LC2101", password: "pw" }).unwrap();
    assert_eq!(value, serde_json::json!({ "lscNumber": "LC2101", "password": "pw" }));
}

#[test]
fn login_response_parses_without_message() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"access":"a","refresh":"r","user":{"id":5,"lsc_code":"LC1","user_type":"admin","email":"e","is_active":true}}"#,
    )
    .unwrap();
    assert_eq!(resp.message, None);
    assert_eq!(resp.user.user_type, Some(UserType::Admin));
}

// =============================================================
// store_login
// =============================================================

#[test]
fn store_login_persists_full_record() {
    let store = SessionStore::new(MemoryStorage::new());
    let resp: LoginResponse = serde_json::from_str(
        r#"{"access":"a","refresh":"r","message":"Welcome","user":{"id":5,"lsc_number":"LC2101","user_type":"user"}}"#,
    )
    .unwrap();
    store_login(&store, &resp).unwrap();
    assert!(store.is_authenticated());
    assert!(store.is_lsc_user());
    assert_eq!(store.get_refresh_token().as_deref(), Some("r"));
    assert_eq!(store.lsc_code(), "LC2101");
}

#[test]
fn store_login_failure_maps_into_login_error() {
    let store = SessionStore::new(MemoryStorage::read_only());
    let resp = LoginResponse {
        access: "a".to_owned(),
        refresh: "r".to_owned(),
        user: crate::session::UserInfo::default(),
        message: None,
    };
    let err: LoginError = store_login(&store, &resp).unwrap_err().into();
    assert_eq!(err.title(), "Login Failed");
    assert!(matches!(err, LoginError::Session(_)));
    assert!(!store.is_authenticated());
}
