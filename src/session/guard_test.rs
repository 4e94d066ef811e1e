use super::*;
use crate::session::storage::MemoryStorage;
use crate::session::token::FixedClock;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn session_with(user_type: Option<UserType>) -> SessionStore<MemoryStorage> {
    let store = SessionStore::new(MemoryStorage::new());
    let info = UserInfo { id: 1, email: "a@b.com".to_owned(), user_type, ..UserInfo::default() };
    store.set_auth_data("tok1", "ref1", &info).unwrap();
    store
}

fn redirect(path: &str) -> GuardDecision {
    GuardDecision::Redirect(path.to_owned())
}

// =============================================================
// guard_route
// =============================================================

#[test]
fn unauthenticated_admin_route_redirects_to_login() {
    let store = SessionStore::new(MemoryStorage::new());
    let decision = guard_route(&store, RouteRequirement::ADMIN, &RoutePaths::default());
    assert_eq!(decision, redirect("/login"));
}

#[test]
fn unauthenticated_open_route_redirects_to_login() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(guard_route(&store, RouteRequirement::ANY, &RoutePaths::default()), redirect("/login"));
}

#[test]
fn non_admin_on_admin_route_goes_to_user_dashboard() {
    let store = session_with(Some(UserType::User));
    let decision = guard_route(&store, RouteRequirement::ADMIN, &RoutePaths::default());
    assert_eq!(decision, redirect("/dashboard/user"));
}

#[test]
fn admin_on_admin_route_is_allowed() {
    let store = session_with(Some(UserType::Admin));
    assert_eq!(guard_route(&store, RouteRequirement::ADMIN, &RoutePaths::default()), GuardDecision::Allow);
}

#[test]
fn admin_on_user_route_goes_to_admin_dashboard() {
    let store = session_with(Some(UserType::Admin));
    let decision = guard_route(&store, RouteRequirement::USER, &RoutePaths::default());
    assert_eq!(decision, redirect("/dashboard/admin"));
}

#[test]
fn user_on_user_route_is_allowed() {
    let store = session_with(Some(UserType::User));
    assert_eq!(guard_route(&store, RouteRequirement::USER, &RoutePaths::default()), GuardDecision::Allow);
}

#[test]
fn any_role_on_open_route_is_allowed() {
    for user_type in [Some(UserType::Admin), Some(UserType::User), Some(UserType::Unknown), None] {
        let store = session_with(user_type);
        assert_eq!(guard_route(&store, RouteRequirement::ANY, &RoutePaths::default()), GuardDecision::Allow);
    }
}

#[test]
fn auxiliary_is_admin_flag_does_not_open_admin_route() {
    let store = SessionStore::new(MemoryStorage::new());
    let info = UserInfo { user_type: Some(UserType::User), is_admin: Some(true), ..UserInfo::default() };
    store.set_auth_data("tok1", "ref1", &info).unwrap();
    let decision = guard_route(&store, RouteRequirement::ADMIN, &RoutePaths::default());
    assert_eq!(decision, redirect("/dashboard/user"));
}

#[test]
fn guard_is_presence_only_for_expired_tokens() {
    let store = SessionStore::new(MemoryStorage::new());
    let expired = format!("h.{}.s", URL_SAFE_NO_PAD.encode(r#"{"exp":1}"#));
    let info = UserInfo { user_type: Some(UserType::Admin), ..UserInfo::default() };
    store.set_auth_data(&expired, "ref1", &info).unwrap();

    assert_eq!(guard_route(&store, RouteRequirement::ADMIN, &RoutePaths::default()), GuardDecision::Allow);

    // The mount-time validation is what removes it.
    assert!(!store.validate_auth(&FixedClock(100.0), &RoutePaths::default()).valid);
    assert_eq!(guard_route(&store, RouteRequirement::ADMIN, &RoutePaths::default()), redirect("/login"));
}

#[test]
fn guard_uses_prefixed_routes() {
    let routes = RoutePaths::with_prefix("/lsc");
    let store = session_with(Some(UserType::User));
    assert_eq!(guard_route(&store, RouteRequirement::ADMIN, &routes), redirect("/lsc/dashboard/user"));
}

// =============================================================
// landing / login redirects
// =============================================================

#[test]
fn landing_sends_each_role_to_its_dashboard() {
    let routes = RoutePaths::default();
    assert_eq!(landing_redirect(&SessionStore::new(MemoryStorage::new()), &routes), "/login");
    assert_eq!(landing_redirect(&session_with(Some(UserType::Admin)), &routes), "/dashboard/admin");
    assert_eq!(landing_redirect(&session_with(Some(UserType::User)), &routes), "/dashboard/user");
    assert_eq!(landing_redirect(&session_with(Some(UserType::Unknown)), &routes), "/login");
}

#[test]
fn login_route_shows_form_when_anonymous() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(login_route_redirect(&store, &RoutePaths::default()), None);
}

#[test]
fn login_route_bounces_authenticated_visitors() {
    let routes = RoutePaths::default();
    assert_eq!(login_route_redirect(&session_with(Some(UserType::Admin)), &routes).as_deref(), Some("/dashboard/admin"));
    assert_eq!(login_route_redirect(&session_with(Some(UserType::User)), &routes).as_deref(), Some("/dashboard/user"));
    assert_eq!(login_route_redirect(&session_with(None), &routes), None);
}

#[test]
fn post_login_redirect_follows_user_type() {
    let routes = RoutePaths::default();
    let mut info = UserInfo { user_type: Some(UserType::Admin), ..UserInfo::default() };
    assert_eq!(post_login_redirect(&info, &routes), "/dashboard/admin");
    info.user_type = Some(UserType::User);
    assert_eq!(post_login_redirect(&info, &routes), "/dashboard/user");
    info.user_type = Some(UserType::Unknown);
    assert_eq!(post_login_redirect(&info, &routes), "/login");
}
