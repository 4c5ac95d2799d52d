//! `dashkit-auth` — client-side session lifecycle for the dashboard.
//!
//! This crate is decoupled from any UI toolkit: storage and credential checks
//! are injected, and every time-dependent call takes `now` explicitly.

pub mod claims;
pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod provider;
pub mod session;
pub mod state;
pub mod token;
pub mod user;

pub use claims::{SessionClaims, TokenValidationError, is_valid_token, validate_claims};
pub use config::AuthConfig;
pub use credentials::{CredentialVerifier, DemoCredentials};
pub use error::{AuthError, StoreError};
pub use guard::{GuardDecision, auth_guard, guest_guard};
pub use provider::AuthProvider;
pub use session::{FileSessionStore, InMemorySessionStore, SessionStore};
pub use state::{AuthAction, AuthPhase, AuthState};
pub use token::SessionToken;
pub use user::AuthUser;
