//! Portal root: forwards to the caller's dashboard or to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::PortalConfig;
use crate::session::{SessionStore, landing_redirect};

#[component]
pub fn LandingPage() -> impl IntoView {
    let routes = use_context::<PortalConfig>().unwrap_or_default().routes;
    let navigate = use_navigate();

    Effect::new(move || {
        let target = landing_redirect(&SessionStore::browser(), &routes);
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <p class="landing-page">"Loading..."</p> }
}
