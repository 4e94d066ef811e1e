//! Route-level authorization decisions.
//!
//! The guard is presence-only: it asks whether a session is on file and
//! what role it carries. Expired tokens are purged by
//! [`SessionStore::validate_auth`] when the application mounts, not here.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::storage::KeyValueStore;
use super::store::SessionStore;
use super::user_info::{UserInfo, UserType};
use crate::config::RoutePaths;

/// Role a route demands. At most one flag is set per route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    pub require_admin: bool,
    pub require_user: bool,
}

impl RouteRequirement {
    pub const ANY: Self = Self { require_admin: false, require_user: false };
    pub const ADMIN: Self = Self { require_admin: true, require_user: false };
    pub const USER: Self = Self { require_admin: false, require_user: true };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Decide whether a route with `requirement` may render.
pub fn guard_route<S: KeyValueStore>(
    store: &SessionStore<S>,
    requirement: RouteRequirement,
    routes: &RoutePaths,
) -> GuardDecision {
    if !store.is_authenticated() {
        return GuardDecision::Redirect(routes.login.clone());
    }
    if requirement.require_admin && !store.is_admin() {
        return GuardDecision::Redirect(routes.user_dashboard.clone());
    }
    if requirement.require_user && !store.is_lsc_user() {
        return GuardDecision::Redirect(routes.admin_dashboard.clone());
    }
    GuardDecision::Allow
}

/// Target for the portal root: the caller's dashboard, or login.
pub fn landing_redirect<S: KeyValueStore>(store: &SessionStore<S>, routes: &RoutePaths) -> String {
    if !store.is_authenticated() {
        return routes.login.clone();
    }
    if store.is_admin() {
        routes.admin_dashboard.clone()
    } else if store.is_lsc_user() {
        routes.user_dashboard.clone()
    } else {
        routes.login.clone()
    }
}

/// Where an already-authenticated visitor to the login route belongs.
///
/// `None` means show the login form. Sessions with an unrecognized role
/// also get the form, since neither dashboard guard would admit them.
pub fn login_route_redirect<S: KeyValueStore>(store: &SessionStore<S>, routes: &RoutePaths) -> Option<String> {
    if !store.is_authenticated() {
        return None;
    }
    if store.is_admin() {
        Some(routes.admin_dashboard.clone())
    } else if store.is_lsc_user() {
        Some(routes.user_dashboard.clone())
    } else {
        None
    }
}

/// Destination right after a successful login.
#[must_use]
pub fn post_login_redirect(user_info: &UserInfo, routes: &RoutePaths) -> String {
    match user_info.user_type {
        Some(UserType::Admin) => routes.admin_dashboard.clone(),
        Some(UserType::User) => routes.user_dashboard.clone(),
        Some(UserType::Unknown) | None => routes.login.clone(),
    }
}
