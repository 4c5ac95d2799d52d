//! Opaque session token.

use serde::{Deserialize, Serialize};

/// Opaque string proving an authenticated session.
///
/// `Debug` never prints the token itself so it can sit in logged structs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an HTTP `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl core::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SessionToken(<{} bytes>)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let token = SessionToken::new("secret-value");
        let printed = format!("{token:?}");
        assert!(!printed.contains("secret"));
        assert_eq!(token.bearer(), "Bearer secret-value");
    }
}
