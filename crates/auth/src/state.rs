//! Auth state and the actions that evolve it.
//!
//! `AuthState` is a plain reducer: the four actions below are the only way it
//! changes, and applying them never touches storage.

use serde::Serialize;

use dashkit_core::Reducer;

use crate::AuthUser;

/// Snapshot of the session as seen by the UI.
///
/// # Invariants
/// - `is_initialized` becomes true on the first `Initialize` and never reverts.
/// - `user` is `Some` iff `is_authenticated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    is_authenticated: bool,
    is_initialized: bool,
    user: Option<AuthUser>,
}

/// Coarse lifecycle position derived from an [`AuthState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPhase {
    Uninitialized,
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn phase(&self) -> AuthPhase {
        match (self.is_initialized, self.is_authenticated) {
            (false, _) => AuthPhase::Uninitialized,
            (true, true) => AuthPhase::Authenticated,
            (true, false) => AuthPhase::Unauthenticated,
        }
    }
}

/// State transitions dispatched by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    Initialize {
        is_authenticated: bool,
        user: Option<AuthUser>,
    },
    Login {
        user: AuthUser,
    },
    Logout,
    Register {
        user: AuthUser,
    },
}

impl AuthAction {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthAction::Initialize { .. } => "INITIALIZE",
            AuthAction::Login { .. } => "LOGIN",
            AuthAction::Logout => "LOGOUT",
            AuthAction::Register { .. } => "REGISTER",
        }
    }
}

impl Reducer for AuthState {
    type Action = AuthAction;

    fn apply(&mut self, action: &AuthAction) {
        match action {
            AuthAction::Initialize {
                is_authenticated,
                user,
            } => {
                // An authenticated flag without a user cannot be represented.
                let user = if *is_authenticated { user.clone() } else { None };
                self.is_authenticated = user.is_some();
                self.user = user;
                self.is_initialized = true;
            }
            AuthAction::Login { user } | AuthAction::Register { user } => {
                self.is_authenticated = true;
                self.user = Some(user.clone());
            }
            AuthAction::Logout => {
                self.is_authenticated = false;
                self.user = None;
            }
        }
    }
}
