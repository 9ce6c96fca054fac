//! Signed-in identity snapshot.

use serde::{Deserialize, Serialize};

use super::email::Email;

const ADMIN_MARKER: &str = "admin";

/// Profile fields supplied by the identity provider.
///
/// This is a snapshot taken at the time of a request; the provider itself
/// (sign-in, sessions, tokens) lives outside this workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub signed_in: bool,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub primary_email: Option<Email>,
}

impl Identity {
    /// An identity with nobody signed in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in identity with the given profile fields.
    #[must_use]
    pub const fn signed_in(
        full_name: Option<String>,
        username: Option<String>,
        primary_email: Option<Email>,
    ) -> Self {
        Self {
            signed_in: true,
            full_name,
            username,
            primary_email,
        }
    }

    /// Whether the profile marks this identity as an admin: full name or
    /// username equal to `admin` ignoring case, or a primary email containing
    /// lowercase `admin`. Names are not trimmed.
    ///
    /// This only decides which screens to show. The fields come from the
    /// client and must never be used as an authorization check.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        let is_marker = |value: &str| value.eq_ignore_ascii_case(ADMIN_MARKER);

        self.full_name.as_deref().is_some_and(is_marker)
            || self.username.as_deref().is_some_and(is_marker)
            || self
                .primary_email
                .as_ref()
                .is_some_and(|email| email.as_str().contains(ADMIN_MARKER))
    }

    /// Best available label for log lines and greetings.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .or_else(|| self.primary_email.as_ref().map(Email::as_str))
            .unwrap_or("anonymous")
    }
}
