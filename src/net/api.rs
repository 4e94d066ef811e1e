//! REST calls to the portal backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs, so the session handling around them stays
//! testable without a network.
//!
//! ERROR HANDLING
//! ==============
//! Login failures are folded into [`LoginError`], whose variants carry the
//! user-facing title and message for the login form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ErrorBody, LoginResponse};
use crate::config::PortalConfig;
use crate::session::{KeyValueStore, SessionError, SessionStore};

pub const LOGIN_PATH: &str = "/auth/login/";
pub const LOGOUT_PATH: &str = "/auth/logout/";

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid LSC Code or Password. Please check your credentials.";
const ACCESS_DENIED_MESSAGE: &str = "Your account has been deactivated. Please contact the administrator.";
const SERVER_ERROR_MESSAGE: &str = "An error occurred on the server. Please try again later.";
const CONNECTION_ERROR_MESSAGE: &str = "Unable to connect to the server. Please check your internet connection.";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

/// Why a login attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    AccessDenied(String),
    #[error("{}", SERVER_ERROR_MESSAGE)]
    Server,
    #[error("{}", CONNECTION_ERROR_MESSAGE)]
    Connection,
    #[error("{0}")]
    Unexpected(String),
    #[error("could not save session: {0}")]
    Session(#[from] SessionError),
}

impl LoginError {
    /// Short heading shown above the message.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::AccessDenied(_) => "Access Denied",
            Self::Server => "Server Error",
            Self::Connection => "Connection Error",
            Self::InvalidCredentials(_) | Self::Unexpected(_) | Self::Session(_) => "Login Failed",
        }
    }
}

/// Map a non-2xx login response to a [`LoginError`].
#[must_use]
pub fn classify_login_failure(status: u16, body: Option<&ErrorBody>) -> LoginError {
    let detail = body.and_then(|b| b.detail.clone()).filter(|d| !d.is_empty());
    match status {
        400 | 401 => LoginError::InvalidCredentials(detail.unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_owned())),
        403 => LoginError::AccessDenied(detail.unwrap_or_else(|| ACCESS_DENIED_MESSAGE.to_owned())),
        500 => LoginError::Server,
        _ => LoginError::Unexpected(
            detail
                .or_else(|| body.and_then(|b| b.error.clone()).filter(|e| !e.is_empty()))
                .unwrap_or_else(|| UNEXPECTED_MESSAGE.to_owned()),
        ),
    }
}

/// Authenticate against `POST {api}/auth/login/`.
///
/// # Errors
///
/// Returns a classified [`LoginError`] for transport failures, non-2xx
/// statuses, and unreadable success bodies.
pub async fn login(config: &PortalConfig, lsc_number: &str, password: &str) -> Result<LoginResponse, LoginError> {
    #[cfg(feature = "csr")]
    {
        let payload = super::types::LoginRequest { lsc_number, password };
        let resp = gloo_net::http::Request::post(&config.endpoint(LOGIN_PATH))
            .json(&payload)
            .map_err(|e| LoginError::Unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::warn!("login request failed: {e}");
                LoginError::Connection
            })?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<ErrorBody>().await.ok();
            return Err(classify_login_failure(status, body.as_ref()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| LoginError::Unexpected(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, lsc_number, password);
        Err(LoginError::Unexpected("not available outside the browser".to_owned()))
    }
}

/// Log in and persist the resulting session.
///
/// # Errors
///
/// Returns the [`login`] error, or [`LoginError::Session`] when the session
/// could not be written.
pub async fn login_and_store<S: KeyValueStore>(
    store: &SessionStore<S>,
    config: &PortalConfig,
    lsc_number: &str,
    password: &str,
) -> Result<LoginResponse, LoginError> {
    let response = login(config, lsc_number, password).await?;
    store_login(store, &response)?;
    log::info!("logged in as {}", response.user.lsc_code());
    Ok(response)
}

/// Write a successful login response into `store`.
///
/// # Errors
///
/// Returns [`SessionError`] when the write is rejected.
pub fn store_login<S: KeyValueStore>(store: &SessionStore<S>, response: &LoginResponse) -> Result<(), SessionError> {
    store.set_auth_data(&response.access, &response.refresh, &response.user)
}

/// End the session locally and tell the backend, best effort.
pub async fn logout<S: KeyValueStore>(store: &SessionStore<S>, config: &PortalConfig) {
    let bearer = store.bearer_header();
    store.clear_auth_data();
    log::info!("logged out");
    #[cfg(feature = "csr")]
    {
        let mut request = gloo_net::http::Request::post(&config.endpoint(LOGOUT_PATH));
        if let Some(bearer) = bearer {
            request = request.header("Authorization", &bearer);
        }
        if let Err(e) = request.send().await {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bearer, config);
    }
}
