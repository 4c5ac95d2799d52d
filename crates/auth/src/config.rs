//! Runtime configuration for the auth provider and demo credentials.

use std::path::PathBuf;

use chrono::Duration;

use dashkit_core::{DomainError, DomainResult};

use crate::credentials::{DEMO_TOKEN_SECRET, DemoCredentials};
use crate::session::ACCESS_TOKEN_KEY;

pub const ENV_SESSION_FILE: &str = "DASHKIT_SESSION_FILE";
pub const ENV_STORAGE_KEY: &str = "DASHKIT_STORAGE_KEY";
pub const ENV_TOKEN_TTL_SECS: &str = "DASHKIT_TOKEN_TTL_SECS";
pub const ENV_TOKEN_SECRET: &str = "DASHKIT_TOKEN_SECRET";
pub const ENV_CLEAR_INVALID_TOKEN: &str = "DASHKIT_CLEAR_INVALID_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Key the token is stored under.
    pub storage_key: String,
    /// Explicit session file; `None` means the OS data directory.
    pub session_file: Option<PathBuf>,
    pub token_ttl: Duration,
    pub token_secret: String,
    /// Remove a persisted token that fails validation during `initialize`.
    pub clear_invalid_token: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: ACCESS_TOKEN_KEY.to_string(),
            session_file: None,
            token_ttl: Duration::hours(24),
            token_secret: DEMO_TOKEN_SECRET.to_string(),
            clear_invalid_token: false,
        }
    }
}

impl AuthConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unparsable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_SESSION_FILE).filter(|v| !v.trim().is_empty()) {
            config.session_file = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup(ENV_STORAGE_KEY).filter(|v| !v.trim().is_empty()) {
            config.storage_key = key;
        }

        if let Some(raw) = lookup(ENV_TOKEN_TTL_SECS) {
            match raw.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => config.token_ttl = Duration::seconds(secs),
                _ => tracing::warn!(
                    value = %raw,
                    "{ENV_TOKEN_TTL_SECS} is not a positive integer; using default"
                ),
            }
        }

        match lookup(ENV_TOKEN_SECRET) {
            Some(secret) if !secret.is_empty() => config.token_secret = secret,
            _ => tracing::warn!("{ENV_TOKEN_SECRET} not set; using insecure demo default"),
        }

        if let Some(raw) = lookup(ENV_CLEAR_INVALID_TOKEN) {
            match raw.trim().parse::<bool>() {
                Ok(flag) => config.clear_invalid_token = flag,
                Err(_) => tracing::warn!(
                    value = %raw,
                    "{ENV_CLEAR_INVALID_TOKEN} is not a boolean; using default"
                ),
            }
        }

        config
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(DomainError::validation("storage key cannot be empty"));
        }
        if self.token_ttl <= Duration::zero() {
            return Err(DomainError::validation("token ttl must be positive"));
        }
        if self.token_secret.is_empty() {
            return Err(DomainError::validation("token secret cannot be empty"));
        }
        Ok(())
    }

    /// Demo credentials signing with this config's secret and ttl.
    pub fn demo_credentials(&self) -> DemoCredentials {
        DemoCredentials::default()
            .with_secret(self.token_secret.as_bytes())
            .with_ttl(self.token_ttl)
    }
}
