//! The auth state machine.
//!
//! `AuthProvider` owns the [`AuthState`] for the lifetime of the application
//! session. The application root constructs one and hands `&AuthProvider` (for
//! snapshots) or `&mut AuthProvider` (for the form handlers) to consumers.
//!
//! Storage is written before an action is dispatched, so a failed write leaves
//! the state exactly as it was.

use chrono::{DateTime, Utc};

use dashkit_core::Reducer;

use crate::claims::{SessionClaims, validate_token};
use crate::config::AuthConfig;
use crate::credentials::{CredentialVerifier, DemoCredentials};
use crate::session::SessionStore;
use crate::{AuthAction, AuthError, AuthState, AuthUser, SessionToken};

pub struct AuthProvider<S, V> {
    state: AuthState,
    store: S,
    verifier: V,
    token: Option<SessionToken>,
    clear_invalid_token: bool,
}

impl<S, V> AuthProvider<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub fn new(store: S, verifier: V) -> Self {
        Self {
            state: AuthState::default(),
            store,
            verifier,
            token: None,
            clear_invalid_token: false,
        }
    }

    /// Remove a persisted token that fails validation during [`initialize`](Self::initialize).
    pub fn clear_invalid_token(mut self, enabled: bool) -> Self {
        self.clear_invalid_token = enabled;
        self
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Token of the current session, if any.
    pub fn session_token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// `Authorization` header value for outgoing API calls.
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(SessionToken::bearer)
    }

    /// Reconcile in-memory state with the persisted token.
    ///
    /// Never fails: any error while reading or validating the token ends in the
    /// unauthenticated state. Runs once; later calls return the current state.
    pub fn initialize(&mut self, now: DateTime<Utc>) -> &AuthState {
        if self.state.is_initialized() {
            tracing::debug!("auth already initialized");
            return &self.state;
        }

        let action = match self.restore_session(now) {
            Ok(Some((token, user))) => {
                tracing::info!(user_id = %user.id, "session restored");
                self.token = Some(token);
                AuthAction::Initialize {
                    is_authenticated: true,
                    user: Some(user),
                }
            }
            Ok(None) => AuthAction::Initialize {
                is_authenticated: false,
                user: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "auth initialization failed; continuing signed out");
                AuthAction::Initialize {
                    is_authenticated: false,
                    user: None,
                }
            }
        };

        self.dispatch(action);
        &self.state
    }

    /// Sign in with an email/password pair.
    ///
    /// On `InvalidCredentials` neither the state nor the store changes.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthUser, AuthError> {
        let Some(user) = self.verifier.verify(email, password) else {
            tracing::warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        self.start_session(&user, now)?;
        self.dispatch(AuthAction::Login { user: user.clone() });
        Ok(user)
    }

    /// Create an account and sign in as it.
    ///
    /// Every submission is accepted; the new user is the verifier's template
    /// with the submitted email and names. Only a storage failure can error.
    pub fn register(
        &mut self,
        email: &str,
        _password: &str,
        first_name: &str,
        last_name: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthUser, AuthError> {
        let user = self
            .verifier
            .registration_template()
            .with_profile(email, first_name, last_name);

        self.start_session(&user, now)?;
        self.dispatch(AuthAction::Register { user: user.clone() });
        Ok(user)
    }

    /// Sign out.
    ///
    /// The transition itself cannot fail: the state always ends
    /// unauthenticated with no user. The returned `Result` only reports
    /// whether the persisted token was removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        let cleared = self.store.clear();
        self.token = None;
        self.dispatch(AuthAction::Logout);
        cleared.map_err(|err| {
            tracing::error!(error = %err, "failed to clear persisted session token");
            AuthError::from(err)
        })
    }

    fn restore_session(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<(SessionToken, AuthUser)>, AuthError> {
        let Some(token) = self.store.get()? else {
            tracing::debug!("no persisted session token");
            return Ok(None);
        };

        let restored = match validate_token(token.as_str(), now) {
            Ok(claims) => {
                tracing::debug!(
                    expires_at = ?claims.expires_at(),
                    "persisted session token accepted"
                );
                self.restore_user(&claims)
            }
            Err(reason) => {
                tracing::info!(%reason, "persisted session token rejected");
                None
            }
        };

        match restored {
            Some(user) => {
                self.store.set(&token)?;
                Ok(Some((token, user)))
            }
            None => {
                if self.clear_invalid_token {
                    self.store.clear()?;
                }
                Ok(None)
            }
        }
    }

    fn restore_user(&self, claims: &SessionClaims) -> Option<AuthUser> {
        let user = self.verifier.restore(claims);
        if user.is_none() {
            tracing::info!(sub = %claims.sub, "no user for persisted session");
        }
        user
    }

    fn start_session(&mut self, user: &AuthUser, now: DateTime<Utc>) -> Result<(), AuthError> {
        let token = self.verifier.issue_token(user, now)?;
        self.store.set(&token)?;
        self.token = Some(token);
        Ok(())
    }

    fn dispatch(&mut self, action: AuthAction) {
        tracing::debug!(action = action.kind(), "auth action");
        self.state.apply(&action);
    }
}

impl<S: SessionStore> AuthProvider<S, DemoCredentials> {
    /// Provider backed by demo credentials, after validating `config`.
    pub fn from_config(store: S, config: &AuthConfig) -> Result<Self, AuthError> {
        config.validate()?;
        Ok(Self::new(store, config.demo_credentials())
            .clear_invalid_token(config.clear_invalid_token))
    }
}
