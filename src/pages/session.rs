//! Session page: login entry point, or the signed-in profile with logout.
//!
//! The `success` query flag is read once when the page mounts and passed to
//! [`SessionView`] as a prop. When set, the view fetches the profile a single
//! time; every fetch failure leaves the profile absent without any message.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::config::BackendConfig;
use crate::net::api::{self, HttpTransport};
#[cfg(feature = "csr")]
use crate::net::transport::BrowserTransport;
use crate::net::types::UserProfile;
use crate::state::session::{SUCCESS_PARAM, SessionFlag, SessionState, ViewMode};
use crate::util::navigation::{BrowserNavigator, Navigator};

/// Fetch the current user, logging failures at debug level as `None`.
pub async fn fetch_profile<T: HttpTransport>(transport: &T, config: &BackendConfig) -> Option<UserProfile> {
    match api::fetch_current_user(transport, config).await {
        Ok(profile) => {
            log::info!("signed in as {}", profile.email);
            Some(profile)
        }
        Err(e) => {
            log::debug!("profile fetch failed: {e}");
            None
        }
    }
}

/// The mount-time profile fetch for `session`, or `None` when the session
/// does not want one (no login marker, or a profile is already stored).
///
/// The task resolves to whether a profile was stored. A session signal that
/// was disposed before the response arrived drops the result.
pub fn profile_task<T: HttpTransport>(
    session: RwSignal<SessionState>,
    transport: T,
    config: BackendConfig,
) -> Option<impl Future<Output = bool>> {
    if !session.try_with_untracked(SessionState::wants_profile).unwrap_or(false) {
        return None;
    }
    Some(async move {
        let Some(profile) = fetch_profile(&transport, &config).await else {
            return false;
        };
        match session.try_update(|s| s.apply_profile(profile)) {
            Some(stored) => stored,
            None => {
                log::debug!("session view unmounted before profile arrived");
                false
            }
        }
    })
}

/// Leave the app for the backend's OAuth entry point.
pub fn begin_login<N: Navigator>(navigator: &N, config: &BackendConfig) {
    let url = config.login_url();
    log::info!("starting login at {url}");
    navigator.navigate(&url);
}

/// Ask the backend to end the session. Local state is left as is.
pub async fn end_session<T: HttpTransport>(transport: &T, config: &BackendConfig) {
    if let Err(e) = api::logout(transport, config).await {
        log::debug!("logout failed: {e}");
    }
}

pub fn greeting(email: &str) -> String {
    format!("Hi {email}")
}

/// Route component: reads the `success` parameter and mounts the view.
#[component]
pub fn SessionPage() -> impl IntoView {
    let query = use_query_map();
    let flag = query.with_untracked(|q| SessionFlag::from_param(q.get(SUCCESS_PARAM).as_deref()));
    view! { <SessionView flag=flag/> }
}

/// Mounts session state for `flag`, starts the profile fetch, and renders
/// [`SessionPanel`].
#[component]
pub fn SessionView(flag: SessionFlag) -> impl IntoView {
    let config = StoredValue::new(use_context::<BackendConfig>().unwrap_or_default());
    let session = RwSignal::new(SessionState::mount(flag));

    // Component bodies run once per mount, so this is the single fetch.
    #[cfg(feature = "csr")]
    if let Some(task) = profile_task(session, BrowserTransport, config.get_value()) {
        leptos::task::spawn_local(async move {
            task.await;
        });
    }

    view! { <SessionPanel session=session config=config/> }
}

/// Login button, or greeting + avatar + logout once a profile is loaded.
#[component]
pub fn SessionPanel(session: RwSignal<SessionState>, config: StoredValue<BackendConfig>) -> impl IntoView {
    let on_login = move |_: leptos::ev::MouseEvent| {
        config.with_value(|c| begin_login(&BrowserNavigator, c));
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                end_session(&BrowserTransport, &config).await;
            });
        }
    };

    view! {
        <div class="session-view">
            {move || match session.with(SessionState::view_mode) {
                ViewMode::Profile { email, avatar_url } => view! {
                    <div class="session-view__profile">
                        <div class="session-view__identity">
                            <p class="session-view__greeting">{greeting(&email)}</p>
                            {avatar_url.map(|src| view! {
                                <img src=src alt="User Profile" class="session-view__avatar"/>
                            })}
                        </div>
                        <button class="session-view__button" on:click=on_logout>
                            "Log out"
                        </button>
                    </div>
                }
                .into_any(),
                ViewMode::Login => view! {
                    <button class="session-view__button" on:click=on_login>
                        "Login with Google"
                    </button>
                }
                .into_any(),
                ViewMode::Blank => ().into_any(),
            }}
        </div>
    }
}
