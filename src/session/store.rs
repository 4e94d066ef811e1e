//! Persisted session record and the derivations read from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the record, every guarded navigation and dashboard render
//! reads it, and logout or expiry removes it. The record is three string
//! keys in a [`KeyValueStore`]; it counts as present only when both the
//! access token and the user-info entry are readable.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail. A corrupt user-info entry is logged and reported as
//! absent. Writes are all-or-nothing: a failed write removes whatever part of
//! the record already landed.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::storage::{BrowserStorage, KeyValueStore, StorageError};
use super::token::{Clock, is_token_expired};
use super::user_info::{UserInfo, UserType};
use crate::config::RoutePaths;

pub const AUTH_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_INFO_KEY: &str = "user_info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode user info: {0}")]
    Encode(String),
}

/// Role of an authenticated session, derived from [`UserType`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub fn from_user_type(user_type: Option<UserType>) -> Option<Self> {
        match user_type? {
            UserType::Admin => Some(Self::Admin),
            UserType::User => Some(Self::User),
            UserType::Unknown => None,
        }
    }
}

/// Where the stored session sits in its lifecycle.
///
/// `Anonymous -> Authenticated -> Expired -> Anonymous`. The role is fixed
/// for one authenticated period; changing it takes a new login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    /// `role` is `None` when the stored `user_type` is not recognized.
    Authenticated { role: Option<Role> },
    Expired,
}

/// Outcome of [`SessionStore::validate_auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthValidation {
    pub valid: bool,
    pub redirect_to: Option<String>,
}

impl AuthValidation {
    fn valid() -> Self {
        Self { valid: true, redirect_to: None }
    }

    fn redirect(path: &str) -> Self {
        Self { valid: false, redirect_to: Some(path.to_owned()) }
    }
}

/// Session record persisted in `S`.
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Session backed by the current origin's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Replace the stored session with a new record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the user info cannot be encoded or any
    /// write is rejected. In both cases no part of the new record is left
    /// behind.
    pub fn set_auth_data(&self, access_token: &str, refresh_token: &str, user_info: &UserInfo) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(user_info).map_err(|e| SessionError::Encode(e.to_string()))?;
        let written = self
            .storage
            .set_item(AUTH_TOKEN_KEY, access_token)
            .and_then(|()| self.storage.set_item(REFRESH_TOKEN_KEY, refresh_token))
            .and_then(|()| self.storage.set_item(USER_INFO_KEY, &encoded));
        if let Err(e) = written {
            log::warn!("session write failed, clearing partial record: {e}");
            self.clear_auth_data();
            return Err(e.into());
        }
        Ok(())
    }

    /// Remove the stored session. Safe to call when none exists.
    pub fn clear_auth_data(&self) {
        self.storage.remove_item(AUTH_TOKEN_KEY);
        self.storage.remove_item(REFRESH_TOKEN_KEY);
        self.storage.remove_item(USER_INFO_KEY);
    }

    pub fn get_access_token(&self) -> Option<String> {
        self.storage.get_item(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn get_refresh_token(&self) -> Option<String> {
        self.storage.get_item(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored user info, or `None` when missing or unparseable.
    pub fn get_user_info(&self) -> Option<UserInfo> {
        let raw = self.storage.get_item(USER_INFO_KEY).filter(|r| !r.is_empty())?;
        match UserInfo::from_json(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                log::warn!("failed to parse user info: {e}");
                None
            }
        }
    }

    /// A session is on file. Does not check token expiry.
    pub fn is_authenticated(&self) -> bool {
        self.get_access_token().is_some() && self.get_user_info().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.get_user_info().is_some_and(|info| info.is_admin_role())
    }

    pub fn is_lsc_user(&self) -> bool {
        self.get_user_info().is_some_and(|info| info.is_user_role())
    }

    pub fn lsc_code(&self) -> String {
        self.get_user_info().map(|info| info.lsc_code().to_owned()).unwrap_or_default()
    }

    pub fn lsc_name(&self) -> String {
        self.get_user_info()
            .map_or_else(|| super::user_info::DEFAULT_LSC_NAME.to_owned(), |info| info.lsc_name().to_owned())
    }

    pub fn role(&self) -> Option<Role> {
        Role::from_user_type(self.get_user_info()?.user_type)
    }

    /// `Authorization` header value for backend calls.
    pub fn bearer_header(&self) -> Option<String> {
        self.get_access_token().map(|token| format!("Bearer {token}"))
    }

    /// Lifecycle state at `clock`'s current time. Read-only.
    pub fn phase(&self, clock: &impl Clock) -> SessionPhase {
        let (Some(token), Some(info)) = (self.get_access_token(), self.get_user_info()) else {
            return SessionPhase::Anonymous;
        };
        if is_token_expired(&token, clock) {
            return SessionPhase::Expired;
        }
        SessionPhase::Authenticated { role: Role::from_user_type(info.user_type) }
    }

    /// Presence plus expiry check. An expired session is cleared before
    /// returning.
    pub fn validate_auth(&self, clock: &impl Clock, routes: &RoutePaths) -> AuthValidation {
        let (Some(token), Some(_)) = (self.get_access_token(), self.get_user_info()) else {
            return AuthValidation::redirect(&routes.login);
        };
        if is_token_expired(&token, clock) {
            log::info!("access token expired, clearing session");
            self.clear_auth_data();
            return AuthValidation::redirect(&routes.login);
        }
        AuthValidation::valid()
    }
}
