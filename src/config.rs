//! Client configuration: backend location and route paths.
//!
//! The API base URL is fixed at build time. `LSC_API_BASE_URL` overrides the
//! default when set and non-blank.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Paths the session guards redirect between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    pub login: String,
    pub admin_dashboard: String,
    pub user_dashboard: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

impl RoutePaths {
    /// Route set mounted under `prefix` (e.g. `/lsc`).
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            login: format!("{prefix}/login"),
            admin_dashboard: format!("{prefix}/dashboard/admin"),
            user_dashboard: format!("{prefix}/dashboard/user"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub routes: RoutePaths,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl PortalConfig {
    /// Config from values captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: resolve_api_base_url(option_env!("LSC_API_BASE_URL")),
            routes: RoutePaths::default(),
        }
    }

    /// Absolute URL for an API path such as `/auth/login/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn resolve_api_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
