//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::PortalConfig;
use crate::pages::{
    dashboard::{AdminDashboard, UserDashboard},
    landing::LandingPage,
    login::LoginPage,
};

/// Root application component.
///
/// Route segments mirror [`crate::config::RoutePaths::default`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(PortalConfig::default());

    view! {
        <Title text="LSC Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("admin"))
                    view=|| view! { <ProtectedRoute require_admin=true><AdminDashboard/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("admin"), WildcardSegment("section"))
                    view=|| view! { <ProtectedRoute require_admin=true><AdminDashboard/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("user"))
                    view=|| view! { <ProtectedRoute require_user=true><UserDashboard/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
