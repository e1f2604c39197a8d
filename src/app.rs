//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::BackendConfig;
use crate::pages::session::SessionPage;

/// Root application component.
///
/// Provides the backend config as context and routes `/` to the session page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BackendConfig::from_env());

    view! {
        <Title text="Login with Google"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionPage/>
            </Routes>
        </Router>
    }
}
