//! User-info snapshot captured at login and persisted with the session.
//!
//! DESIGN
//! ======
//! The backend has shipped two generations of field names for the LSC code
//! (`lsc_code` / `lsc_number`) and display name (`lsc_name` / `center_name`).
//! Both are kept as explicit optional fields and resolved through
//! [`UserInfo::lsc_code`] and [`UserInfo::lsc_name`] so callers never read
//! the raw JSON.
//!
//! Parsing is per field: a field of the wrong JSON type reads as its default
//! and the rest of the record still loads.

#[cfg(test)]
#[path = "user_info_test.rs"]
mod user_info_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display name used when the record carries neither name field.
pub const DEFAULT_LSC_NAME: &str = "LSC Portal";

/// Authoritative account role. Drives every routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    User,
    /// Any role string this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// Point-in-time copy of the logged-in account as returned by the login
/// endpoint.
///
/// Missing fields fall back to their defaults so a record written by an
/// older backend still loads. A field holding the wrong JSON type reads as
/// its default instead of rejecting the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub lsc_code: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub lsc_number: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub lsc_name: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub center_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: String,
    #[serde(deserialize_with = "lenient")]
    pub is_active: bool,
    /// `None` only when the field is absent; any other value that is not
    /// `"admin"` or `"user"` is [`UserType::Unknown`].
    #[serde(deserialize_with = "lenient_user_type")]
    pub user_type: Option<UserType>,
    /// Auxiliary flag; not consulted for routing.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Auxiliary flag; not consulted for routing.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl UserInfo {
    /// Parse a persisted record. Only a JSON object counts as a record.
    ///
    /// # Errors
    ///
    /// Returns a description of why `raw` is not a user record.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        match serde_json::from_str::<Value>(raw).map_err(|e| e.to_string())? {
            value @ Value::Object(_) => serde_json::from_value(value).map_err(|e| e.to_string()),
            _ => Err("user info is not a JSON object".to_owned()),
        }
    }

    /// `lsc_name`, else `center_name`, if either is set.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        first_present(&[&self.lsc_name, &self.center_name])
    }

    /// `lsc_code`, else `lsc_number`, else `""`. Empty strings count as absent.
    #[must_use]
    pub fn lsc_code(&self) -> &str {
        first_present(&[&self.lsc_code, &self.lsc_number]).unwrap_or("")
    }

    /// `lsc_name`, else `center_name`, else [`DEFAULT_LSC_NAME`].
    #[must_use]
    pub fn lsc_name(&self) -> &str {
        self.display_name().unwrap_or(DEFAULT_LSC_NAME)
    }

    #[must_use]
    pub fn is_admin_role(&self) -> bool {
        self.user_type == Some(UserType::Admin)
    }

    #[must_use]
    pub fn is_user_role(&self) -> bool {
        self.user_type == Some(UserType::User)
    }
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| Option::as_deref(*c))
        .find(|v| !v.is_empty())
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Strings pass through; numbers are kept as their decimal text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_user_type<'de, D>(deserializer: D) -> Result<Option<UserType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(match Value::deserialize(deserializer)? {
        Value::String(s) if s == "admin" => UserType::Admin,
        Value::String(s) if s == "user" => UserType::User,
        _ => UserType::Unknown,
    }))
}
