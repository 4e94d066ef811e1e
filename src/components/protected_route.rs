//! Role-aware wrapper for dashboard routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision comes from [`guard_route`]; this component only applies it.
//! It runs in an effect after mount, and children stay hidden until the
//! decision allows them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::PortalConfig;
use crate::session::{GuardDecision, RouteRequirement, SessionStore, guard_route};

#[component]
pub fn ProtectedRoute(
    #[prop(optional)] require_admin: bool,
    #[prop(optional)] require_user: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let routes = use_context::<PortalConfig>().unwrap_or_default().routes;
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);
    let requirement = RouteRequirement { require_admin, require_user };

    Effect::new(move || match guard_route(&SessionStore::browser(), requirement, &routes) {
        GuardDecision::Allow => allowed.set(true),
        GuardDecision::Redirect(target) => {
            allowed.set(false);
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
