//! Credential verification strategies.

use chrono::{DateTime, Duration, Utc};

use crate::claims::{SessionClaims, encode_claims};
use crate::user::DEMO_PASSWORD;
use crate::{AuthError, AuthUser, SessionToken};

/// Pluggable source of identities for the auth provider.
///
/// The provider only decides *when* to call these; which users exist and what
/// a session token looks like is up to the implementation.
pub trait CredentialVerifier {
    /// Resolve an email/password pair to a user, or `None` if they don't match.
    fn verify(&self, email: &str, password: &str) -> Option<AuthUser>;

    /// Base record that registration overrides with the submitted profile.
    fn registration_template(&self) -> AuthUser;

    /// User to restore for a persisted token whose claims passed validation.
    fn restore(&self, claims: &SessionClaims) -> Option<AuthUser>;

    /// Mint the token persisted for a new session.
    fn issue_token(&self, user: &AuthUser, now: DateTime<Utc>) -> Result<SessionToken, AuthError>;
}

/// Secret used to sign demo tokens when none is configured.
pub const DEMO_TOKEN_SECRET: &str = "dashkit-demo-secret";

/// One hard-coded identity, checked with plain string equality.
///
/// Not production-grade: the comparison is not constant-time and the password
/// is held in memory as-is.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    user: AuthUser,
    password: String,
    secret: Vec<u8>,
    ttl: Duration,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            user: AuthUser::demo(),
            password: DEMO_PASSWORD.to_string(),
            secret: DEMO_TOKEN_SECRET.as_bytes().to_vec(),
            ttl: Duration::hours(24),
        }
    }
}

impl DemoCredentials {
    pub fn new(user: AuthUser, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.secret = secret.into();
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<AuthUser> {
        (email == self.user.email && password == self.password).then(|| self.user.clone())
    }

    fn registration_template(&self) -> AuthUser {
        self.user.clone()
    }

    fn restore(&self, _claims: &SessionClaims) -> Option<AuthUser> {
        // There is no user database behind the demo; any valid session is the demo user.
        Some(self.user.clone())
    }

    fn issue_token(&self, user: &AuthUser, now: DateTime<Utc>) -> Result<SessionToken, AuthError> {
        let claims = SessionClaims::for_user(user, now, self.ttl);
        encode_claims(&claims, &self.secret)
            .map(SessionToken::new)
            .map_err(|e| AuthError::token(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{decode_claims, is_valid_token};
    use crate::user::DEMO_EMAIL;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn accepts_only_the_exact_demo_pair() {
        let creds = DemoCredentials::default();

        assert_eq!(creds.verify(DEMO_EMAIL, DEMO_PASSWORD), Some(AuthUser::demo()));
        assert_eq!(creds.verify(DEMO_EMAIL, "wrong"), None);
        assert_eq!(creds.verify("other@minimals.cc", DEMO_PASSWORD), None);
        assert_eq!(creds.verify("DEMO@minimals.cc", DEMO_PASSWORD), None);
        assert_eq!(creds.verify("", ""), None);
    }

    #[test]
    fn custom_identity() {
        let user = AuthUser::demo().with_profile("ops@example.com", "Ops", "Team");
        let creds = DemoCredentials::new(user.clone(), "hunter2");

        assert_eq!(creds.verify("ops@example.com", "hunter2"), Some(user));
        assert_eq!(creds.verify(DEMO_EMAIL, DEMO_PASSWORD), None);
    }

    #[test]
    fn issued_token_carries_user_and_ttl() {
        let creds = DemoCredentials::default().with_ttl(Duration::minutes(10));
        let token = creds.issue_token(&AuthUser::demo(), now()).unwrap();

        let claims = decode_claims(token.as_str()).unwrap();
        assert_eq!(claims.sub, "123");
        assert_eq!(claims.iat, Some(now().timestamp()));
        assert_eq!(claims.exp, (now() + Duration::minutes(10)).timestamp());
        assert!(is_valid_token(token.as_str(), now()));
    }

    #[test]
    fn restore_always_yields_the_configured_identity() {
        let creds = DemoCredentials::default();
        let claims = SessionClaims {
            sub: "someone-else".into(),
            email: None,
            iat: None,
            exp: now().timestamp() + 60,
        };
        assert_eq!(creds.restore(&claims), Some(AuthUser::demo()));
    }
}
