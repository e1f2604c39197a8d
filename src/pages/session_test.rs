use futures::executor::block_on;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::net::api::test_helpers::{RecordingTransport, me_body};
use crate::net::api::{ApiError, HttpMethod, me_request};
use crate::util::navigation::test_helpers::RecordingNavigator;

/// Mount session state for `success` and run its profile fetch, if any.
fn mount_and_load(success: Option<&str>, transport: &RecordingTransport) -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::mount(SessionFlag::from_param(success)));
    if let Some(task) = profile_task(session, transport, BackendConfig::default()) {
        block_on(task);
    }
    session
}

fn render_panel(session: RwSignal<SessionState>) -> String {
    let config = StoredValue::new(BackendConfig::default());
    view! { <SessionPanel session=session config=config/> }.to_html()
}

// =============================================================
// Mount: profile fetch
// =============================================================

#[test]
fn success_ok_logs_in_and_fetches_profile_once() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(200, &me_body("1", "a@b.com", ""));
    let session = mount_and_load(Some("ok"), &transport);

    assert!(session.with_untracked(|s| s.logged_in));
    assert_eq!(transport.sent(), vec![me_request(&BackendConfig::default())]);
    assert!(transport.sent()[0].with_credentials);
}

#[test]
fn loaded_session_does_not_fetch_again() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(200, &me_body("1", "a@b.com", ""));
    let session = mount_and_load(Some("ok"), &transport);

    assert!(profile_task(session, &transport, BackendConfig::default()).is_none());
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn other_success_values_issue_no_request() {
    let owner = Owner::new();
    owner.set();
    for success in [None, Some(""), Some("no"), Some("OK")] {
        let transport = RecordingTransport::replying(200, &me_body("1", "a@b.com", ""));
        let session = mount_and_load(success, &transport);

        assert!(transport.sent().is_empty(), "success={success:?} must not fetch");
        assert_eq!(session.get_untracked(), SessionState::default(), "success={success:?}");
    }
}

#[test]
fn profile_arriving_after_unmount_is_dropped() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(200, &me_body("1", "a@b.com", ""));
    let session = RwSignal::new(SessionState::mount(SessionFlag::LOGGED_IN));
    let task = profile_task(session, &transport, BackendConfig::default()).expect("logged-in view wants a profile");

    session.dispose();

    assert!(!block_on(task));
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn disposed_session_starts_no_fetch() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(200, "");
    let session = RwSignal::new(SessionState::mount(SessionFlag::LOGGED_IN));
    session.dispose();

    assert!(profile_task(session, &transport, BackendConfig::default()).is_none());
    assert!(transport.sent().is_empty());
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn profile_with_empty_picture_renders_greeting_without_avatar() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(200, &me_body("1", "a@b.com", ""));
    let html = render_panel(mount_and_load(Some("ok"), &transport));

    assert!(html.contains("Hi a@b.com"), "{html}");
    assert!(html.contains("Log out"), "{html}");
    assert!(!html.contains("<img"), "{html}");
    assert!(!html.contains("Login with Google"), "{html}");
}

#[test]
fn profile_with_picture_renders_avatar_source() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(200, &me_body("1", "a@b.com", "https://img.example/a.png"));
    let html = render_panel(mount_and_load(Some("ok"), &transport));

    assert!(html.contains("<img"), "{html}");
    assert!(html.contains(r#"src="https://img.example/a.png""#), "{html}");
}

#[test]
fn logged_out_view_renders_login_action() {
    let owner = Owner::new();
    owner.set();
    let flag = SessionFlag::ABSENT;
    let html = view! { <SessionView flag=flag/> }.to_html();

    assert!(html.contains("Login with Google"), "{html}");
    assert!(!html.contains("Log out"), "{html}");
}

// =============================================================
// Mount: silent failures
// =============================================================

#[test]
fn non_2xx_after_login_redirect_renders_nothing() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(401, "User not authenticated\n");
    let session = mount_and_load(Some("ok"), &transport);

    assert_eq!(session.with_untracked(SessionState::view_mode), ViewMode::Blank);
    let html = render_panel(session);
    assert!(!html.contains("<button"), "{html}");
    assert!(!html.contains("<img"), "{html}");
}

#[test]
fn non_2xx_without_login_marker_keeps_login_action() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(401, "");
    let session = RwSignal::new(SessionState::mount(SessionFlag::ABSENT));

    // Even a fetch forced past the mount gate cannot attach a profile.
    if let Some(profile) = block_on(fetch_profile(&transport, &BackendConfig::default())) {
        session.update(|s| {
            s.apply_profile(profile);
        });
    }
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(session.with_untracked(SessionState::view_mode), ViewMode::Login);
    assert!(render_panel(session).contains("Login with Google"));
}

#[test]
fn network_failure_leaves_profile_absent() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::failing(ApiError::Network("offline".to_owned()));
    let session = mount_and_load(Some("ok"), &transport);
    assert_eq!(session.with_untracked(SessionState::view_mode), ViewMode::Blank);
}

#[test]
fn malformed_body_leaves_profile_absent() {
    let owner = Owner::new();
    owner.set();
    let transport = RecordingTransport::replying(200, r#"{"Email":"a@b.com"}"#);
    let session = mount_and_load(Some("ok"), &transport);
    assert!(session.with_untracked(|s| s.profile.is_none()));
}

#[test]
fn null_picture_still_shows_greeting() {
    let owner = Owner::new();
    owner.set();
    let body = r#"{"RawData":{"id":"1","email":"a@b.com","picture":null}}"#;
    let transport = RecordingTransport::replying(200, body);
    let html = render_panel(mount_and_load(Some("ok"), &transport));

    assert!(html.contains("Hi a@b.com"), "{html}");
    assert!(!html.contains("<img"), "{html}");
}

// =============================================================
// Actions
// =============================================================

#[test]
fn login_navigates_once_to_backend_entry() {
    let navigator = RecordingNavigator::default();

    begin_login(&navigator, &BackendConfig::default());

    assert_eq!(*navigator.visited.borrow(), vec!["http://localhost:8080/auth/google".to_owned()]);
}

#[test]
fn logout_sends_one_credentialed_request() {
    let transport = RecordingTransport::replying(307, "");
    block_on(end_session(&transport, &BackendConfig::default()));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "http://localhost:8080/auth/logout/google");
    assert_eq!(sent[0].method, HttpMethod::Get);
    assert!(sent[0].with_credentials);
}

#[test]
fn logout_failure_is_swallowed() {
    let transport = RecordingTransport::failing(ApiError::Network("offline".to_owned()));
    block_on(end_session(&transport, &BackendConfig::default()));
    assert_eq!(transport.sent().len(), 1);
}
