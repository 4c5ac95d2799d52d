//! Black-box session lifecycle against the durable file store.

use chrono::{DateTime, Duration, TimeZone, Utc};

use dashkit_auth::{
    AuthConfig, AuthError, AuthPhase, AuthProvider, AuthUser, DemoCredentials, FileSessionStore,
    GuardDecision, SessionStore, auth_guard, guest_guard,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 14, 10, 0, 0).unwrap()
}

fn boot(
    store: &FileSessionStore,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> AuthProvider<FileSessionStore, DemoCredentials> {
    let mut auth = AuthProvider::from_config(store.clone(), config).unwrap();
    auth.initialize(now);
    auth
}

#[test]
fn login_survives_restart_until_expiry() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    let config = AuthConfig {
        token_ttl: Duration::hours(1),
        ..AuthConfig::default()
    };

    let mut first = boot(&store, &config, t0());
    assert_eq!(auth_guard(first.state()), GuardDecision::RedirectToLogin);
    first.login("demo@minimals.cc", "demo1234", t0()).unwrap();
    drop(first);

    let second = boot(&store, &config, t0() + Duration::minutes(30));
    assert_eq!(second.state().phase(), AuthPhase::Authenticated);
    assert_eq!(second.state().user(), Some(&AuthUser::demo()));
    assert_eq!(guest_guard(second.state()), GuardDecision::RedirectToDashboard);

    let third = boot(&store, &config, t0() + Duration::hours(2));
    assert_eq!(third.state().phase(), AuthPhase::Unauthenticated);
    assert!(store.get().unwrap().is_some());
}

#[test]
fn registered_session_restores_as_demo_identity() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    let config = AuthConfig::default();

    let mut first = boot(&store, &config, t0());
    let user = first.register("a@b.com", "x", "A", "B", t0()).unwrap();
    assert_eq!(user.email, "a@b.com");

    let second = boot(&store, &config, t0() + Duration::minutes(1));
    assert_eq!(second.state().user(), Some(&AuthUser::demo()));
}

#[test]
fn logout_removes_persisted_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = FileSessionStore::new(&path);
    let config = AuthConfig::default();

    let mut auth = boot(&store, &config, t0());
    auth.login("demo@minimals.cc", "demo1234", t0()).unwrap();
    assert!(path.exists());

    auth.logout().unwrap();
    assert!(!path.exists());

    let again = boot(&store, &config, t0());
    assert!(!again.state().is_authenticated());
}

#[test]
fn logout_after_register_and_after_restore() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = FileSessionStore::new(&path);
    let config = AuthConfig::default();

    let mut registered = boot(&store, &config, t0());
    registered.register("a@b.com", "x", "A", "B", t0()).unwrap();
    registered.logout().unwrap();
    assert_eq!(registered.state().phase(), AuthPhase::Unauthenticated);
    assert!(registered.state().user().is_none());
    assert!(!path.exists());

    let mut first = boot(&store, &config, t0());
    first.login("demo@minimals.cc", "demo1234", t0()).unwrap();
    drop(first);

    let mut restored = boot(&store, &config, t0() + Duration::minutes(5));
    assert!(restored.state().is_authenticated());
    restored.logout().unwrap();
    assert_eq!(restored.state().phase(), AuthPhase::Unauthenticated);
    assert!(restored.authorization_header().is_none());
    assert!(store.get().unwrap().is_none());

    let after = boot(&store, &config, t0() + Duration::minutes(6));
    assert!(!after.state().is_authenticated());
}

#[test]
fn corrupt_session_file_does_not_block_login_or_logout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"accessToken": "abc"#).unwrap();
    let store = FileSessionStore::new(&path);
    let config = AuthConfig::default();

    let mut auth = boot(&store, &config, t0());
    assert_eq!(auth.state().phase(), AuthPhase::Unauthenticated);

    auth.login("demo@minimals.cc", "demo1234", t0()).unwrap();
    assert!(auth.state().is_authenticated());
    assert!(store.get().unwrap().is_some());

    std::fs::write(&path, r#"{"accessToken": "abc"#).unwrap();
    auth.logout().unwrap();
    assert!(!auth.state().is_authenticated());
    assert!(store.get().unwrap().is_none());

    std::fs::write(&path, r#"{"accessToken": "abc"#).unwrap();
    let mut again = boot(&store, &config, t0());
    again.register("a@b.com", "x", "A", "B", t0()).unwrap();
    assert!(again.state().is_authenticated());
}

#[test]
fn invalid_persisted_token_is_cleared_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"accessToken":"dummy-token-1234567890"}"#).unwrap();
    let store = FileSessionStore::new(&path);

    let kept = boot(&store, &AuthConfig::default(), t0());
    assert!(!kept.state().is_authenticated());
    assert!(store.get().unwrap().is_some());

    let config = AuthConfig {
        clear_invalid_token: true,
        ..AuthConfig::default()
    };
    let cleared = boot(&store, &config, t0());
    assert!(!cleared.state().is_authenticated());
    assert!(store.get().unwrap().is_none());
}

#[test]
fn wrong_password_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    let mut auth = boot(&store, &AuthConfig::default(), t0());

    let err = auth.login("demo@minimals.cc", "demo12345", t0()).unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(store.get().unwrap().is_none());
}
