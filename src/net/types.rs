//! Wire DTOs for the auth backend's `/auth/me` response.
//!
//! DESIGN
//! ======
//! The backend serializes its whole provider user object. Only the
//! `RawData` wrapper (the provider's own profile payload) is read; sibling
//! fields are ignored so backend additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// Provider-scoped user identifier.
    pub id: String,
    pub email: String,
    /// Avatar URL. Providers send it missing, `null`, or empty when there
    /// is none.
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserProfile {
    /// Avatar URL, if the provider supplied a non-empty one.
    pub fn avatar_url(&self) -> Option<&str> {
        self.picture.as_deref().filter(|url| !url.is_empty())
    }
}

/// Envelope returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    #[serde(rename = "RawData")]
    pub raw_data: UserProfile,
}
