//! Login page: LSC code + password against the portal backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::PortalConfig;
use crate::session::{SessionStore, UserInfo, login_route_redirect};

/// Shortest LSC code the backend will accept.
pub const MIN_LSC_CODE_LEN: usize = 4;

/// Client-side rejection of the login form before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginInputError {
    #[error("Please enter both LSC Code and Password")]
    MissingFields,
    #[error("LSC Code must be at least 4 characters long")]
    CodeTooShort,
}

impl LoginInputError {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::MissingFields => "Missing Information",
            Self::CodeTooShort => "Invalid LSC Code",
        }
    }
}

/// Validate the form, returning the trimmed LSC code on success.
///
/// # Errors
///
/// Returns [`LoginInputError`] when a field is empty or the code is too short.
pub fn validate_login_input(lsc_number: &str, password: &str) -> Result<String, LoginInputError> {
    if lsc_number.is_empty() || password.is_empty() {
        return Err(LoginInputError::MissingFields);
    }
    let trimmed = lsc_number.trim();
    if trimmed.chars().count() < MIN_LSC_CODE_LEN {
        return Err(LoginInputError::CodeTooShort);
    }
    Ok(trimmed.to_owned())
}

/// Success banner text: the backend's message, else a greeting naming the
/// centre, or the submitted code when the record has no display name.
#[must_use]
pub fn welcome_message(message: Option<&str>, user: &UserInfo, code: &str) -> String {
    match message.filter(|m| !m.is_empty()) {
        Some(message) => message.to_owned(),
        None => format!("Welcome back, {}!", user.display_name().unwrap_or(code)),
    }
}

/// Banner shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    title: String,
    message: String,
    is_error: bool,
}

impl Notice {
    fn error(title: &str, message: String) -> Self {
        Self { title: title.to_owned(), message, is_error: true }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let lsc_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    // Already signed in: go straight to the dashboard.
    {
        let navigate = navigate.clone();
        let routes = config.routes.clone();
        Effect::new(move || {
            if let Some(target) = login_route_redirect(&SessionStore::browser(), &routes) {
                navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code = match validate_login_input(&lsc_number.get(), &password.get()) {
            Ok(code) => code,
            Err(e) => {
                notice.set(Some(Notice::error(e.title(), e.to_string())));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let config = config.clone();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                let store = SessionStore::browser();
                match crate::net::api::login_and_store(&store, &config, &code, &password_value).await {
                    Ok(resp) => {
                        let welcome = welcome_message(resp.message.as_deref(), &resp.user, &code);
                        notice.set(Some(Notice { title: "Login Successful".to_owned(), message: welcome, is_error: false }));
                        let target = crate::session::post_login_redirect(&resp.user, &config.routes);
                        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        notice.set(Some(Notice::error(e.title(), e.to_string())));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = code;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LSC Portal"</h1>
                <p class="login-card__subtitle">"Sign in with your LSC Code"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="LSC Code"
                        autocomplete="username"
                        prop:value=move || lsc_number.get()
                        on:input=move |ev| lsc_number.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || show_password.get()
                            on:change=move |_| show_password.update(|v| *v = !*v)
                        />
                        "Show password"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                {move || {
                    notice
                        .get()
                        .map(|n| {
                            let class = if n.is_error { "login-message login-message--error" } else { "login-message" };
                            view! {
                                <div class=class>
                                    <strong>{n.title}</strong>
                                    <p>{n.message}</p>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
