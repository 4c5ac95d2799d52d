//! Route gating decisions for the UI layer.
//!
//! Pages behind a login wrap themselves in [`auth_guard`]; the login and
//! register pages use [`guest_guard`] so a signed-in user is sent onwards.

use crate::AuthState;

pub const PATH_LOGIN: &str = "/auth/login";
pub const PATH_AFTER_LOGIN: &str = "/dashboard/app";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initialization has not resolved yet; render a loading screen.
    Pending,
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

impl GuardDecision {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some(PATH_LOGIN),
            GuardDecision::RedirectToDashboard => Some(PATH_AFTER_LOGIN),
            GuardDecision::Pending | GuardDecision::Allow => None,
        }
    }
}

/// Gate for pages that require a signed-in user.
pub fn auth_guard(state: &AuthState) -> GuardDecision {
    if !state.is_initialized() {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Gate for pages only meaningful while signed out.
pub fn guest_guard(state: &AuthState) -> GuardDecision {
    if !state.is_initialized() {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::RedirectToDashboard
    } else {
        GuardDecision::Allow
    }
}
