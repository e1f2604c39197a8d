//! Session state for the single view: the post-redirect flag and the
//! fetched profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend appends `?success=ok` when it redirects back after a
//! completed OAuth handshake. That marker is read once at mount and passed
//! in as a [`SessionFlag`]; nothing here touches the URL or the network.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

/// Query parameter carrying the post-login marker.
pub const SUCCESS_PARAM: &str = "success";
/// The only value that counts as a completed login.
pub const SUCCESS_VALUE: &str = "ok";

/// Whether the page was loaded from a successful auth redirect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlag(bool);

impl SessionFlag {
    pub const LOGGED_IN: Self = Self(true);
    pub const ABSENT: Self = Self(false);

    /// Interpret the raw `success` parameter. Only an exact `"ok"` is set.
    pub fn from_param(value: Option<&str>) -> Self {
        Self(value == Some(SUCCESS_VALUE))
    }

    pub fn is_set(self) -> bool {
        self.0
    }
}

/// What the view shows for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Greeting, optional avatar, and the logout action.
    Profile { email: String, avatar_url: Option<String> },
    /// The login entry point.
    Login,
    /// Logged-in marker present but no profile (in flight or failed).
    Blank,
}

/// View-local session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub profile: Option<UserProfile>,
}

impl SessionState {
    /// Initial state for a freshly mounted view.
    pub fn mount(flag: SessionFlag) -> Self {
        Self { logged_in: flag.is_set(), profile: None }
    }

    /// Whether the mount effect should request the profile.
    pub fn wants_profile(&self) -> bool {
        self.logged_in && self.profile.is_none()
    }

    /// Store a fetched profile. Ignored unless logged in, so a profile never
    /// exists without the flag.
    pub fn apply_profile(&mut self, profile: UserProfile) -> bool {
        if !self.logged_in {
            log::warn!("dropping profile for a view without a login marker");
            return false;
        }
        self.profile = Some(profile);
        true
    }

    pub fn view_mode(&self) -> ViewMode {
        match (&self.profile, self.logged_in) {
            (Some(profile), _) => ViewMode::Profile {
                email: profile.email.clone(),
                avatar_url: profile.avatar_url().map(str::to_owned),
            },
            (None, false) => ViewMode::Login,
            (None, true) => ViewMode::Blank,
        }
    }
}
