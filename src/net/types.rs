//! Wire DTOs for the portal's auth endpoints.

use serde::{Deserialize, Serialize};

use crate::session::UserInfo;

/// Body of `POST /auth/login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    #[serde(rename = "lscNumber")]
    pub lsc_number: &'a str,
    pub password: &'a str,
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserInfo,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
