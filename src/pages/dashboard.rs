//! Admin and LSC-user dashboard shells.
//!
//! Each dashboard shows the signed-in centre and a logout action. The
//! management modules mounted under them live outside this crate.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::PortalConfig;
use crate::session::SessionStore;

/// Section slug for an admin URL: the last path segment, or `dashboard` at
/// the dashboard root.
#[must_use]
pub fn admin_section(pathname: &str) -> &str {
    let parts: Vec<&str> = pathname.split('/').filter(|p| !p.is_empty()).collect();
    match parts.last() {
        None => "dashboard",
        Some(last) if *last == "admin" || parts.len() <= 2 => "dashboard",
        Some(last) => *last,
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let location = use_location();
    let section = move || admin_section(&location.pathname.get()).to_owned();
    view! {
        <DashboardShell heading="Admin Dashboard">
            <p class="dashboard-page__section">{section}</p>
        </DashboardShell>
    }
}

#[component]
pub fn UserDashboard() -> impl IntoView {
    view! {
        <DashboardShell heading="LSC Dashboard">
            <p class="dashboard-page__section">"dashboard"</p>
        </DashboardShell>
    }
}

/// Header with centre identity and logout, wrapping the dashboard body.
#[component]
fn DashboardShell(heading: &'static str, children: Children) -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let navigate = use_navigate();

    // Filled after mount so the header re-reads storage on every visit.
    let lsc_name = RwSignal::new(String::new());
    let lsc_code = RwSignal::new(String::new());
    Effect::new(move || {
        let store = SessionStore::browser();
        lsc_name.set(store.lsc_name());
        lsc_code.set(store.lsc_code());
    });

    let on_logout = move |_| {
        let navigate = navigate.clone();
        let config = config.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&SessionStore::browser(), &config).await;
            navigate(&config.routes.login, NavigateOptions::default());
        });
        #[cfg(not(feature = "csr"))]
        {
            SessionStore::browser().clear_auth_data();
            navigate(&config.routes.login, NavigateOptions::default());
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>{heading}</h1>
                    <p class="dashboard-page__centre">
                        {move || lsc_name.get()}
                        <span class="dashboard-page__code">{move || lsc_code.get()}</span>
                    </p>
                </div>
                <button class="btn btn--secondary" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <main class="dashboard-page__body">{children()}</main>
        </div>
    }
}
