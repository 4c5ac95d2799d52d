//! Errors surfaced by auth operations.

use thiserror::Error;

use dashkit_core::DomainError;

/// Failure of a session store read or write.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// Error returned by [`AuthProvider`](crate::AuthProvider) operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login only; state is left untouched.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("session token: {0}")]
    Token(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AuthError {
    pub fn token(msg: impl Into<String>) -> Self {
        Self::Token(msg.into())
    }
}
