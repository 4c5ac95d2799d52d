//! Authenticated user record and the built-in demo identity.

use serde::{Deserialize, Serialize};

use dashkit_core::{UserId, ValueObject};

pub const DEMO_USER_ID: &str = "123";
pub const DEMO_EMAIL: &str = "demo@minimals.cc";
pub const DEMO_PASSWORD: &str = "demo1234";
pub const DEMO_FIRST_NAME: &str = "John";
pub const DEMO_LAST_NAME: &str = "Doe";

/// The identity shown by the dashboard once a session is established.
///
/// Immutable: registration builds a new record from a template instead of
/// editing one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl ValueObject for AuthUser {}

impl AuthUser {
    /// The single fixed identity used in place of a user database.
    pub fn demo() -> Self {
        Self {
            id: UserId::new_unchecked(DEMO_USER_ID),
            email: DEMO_EMAIL.to_string(),
            first_name: DEMO_FIRST_NAME.to_string(),
            last_name: DEMO_LAST_NAME.to_string(),
        }
    }

    /// Copy of `self` with the profile fields replaced; the id is kept.
    pub fn with_profile(
        &self,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..self.clone()
        }
    }

    pub fn display_name(&self) -> String {
        match (self.first_name.trim(), self.last_name.trim()) {
            ("", "") => self.email.clone(),
            (first, "") => first.to_string(),
            ("", last) => last.to_string(),
            (first, last) => format!("{first} {last}"),
        }
    }
}
