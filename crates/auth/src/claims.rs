use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AuthUser;

/// Claims carried by a persisted session token.
///
/// Timestamps are seconds since the Unix epoch, as in any JWT. Only `exp` is
/// required; tokens minted elsewhere may omit the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / user identifier.
    #[serde(default)]
    pub sub: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Issued-at timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration timestamp.
    pub exp: i64,
}

impl SessionClaims {
    pub fn for_user(user: &AuthUser, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user.id.to_string(),
            email: Some(user.email.clone()),
            iat: Some(issued_at.timestamp()),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Strictly validate session claims against `now`, including the `iat`
/// window.
///
/// Stricter than [`is_valid_token`]: a token from an issuer whose clock runs
/// ahead fails here with `NotYetValid` but is still a usable session.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if let Some(iat) = claims.iat {
        if claims.exp <= iat {
            return Err(TokenValidationError::InvalidTimeWindow);
        }
        if now.timestamp() < iat {
            return Err(TokenValidationError::NotYetValid);
        }
    }
    check_expiry(claims, now)
}

/// Expiry-only check; the sole rule deciding whether a session is restored.
pub fn check_expiry(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if now.timestamp() >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

/// Decode the payload of a JWT without checking its signature.
///
/// The dashboard never holds the signing key; the server remains the
/// authority and rejects forged tokens on use.
pub fn decode_claims(token: &str) -> Result<SessionClaims, TokenValidationError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    jsonwebtoken::decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenValidationError::Malformed(e.to_string()))
}

/// Decode a token and reject it only if it is malformed or expired.
pub fn validate_token(
    token: &str,
    now: DateTime<Utc>,
) -> Result<SessionClaims, TokenValidationError> {
    let claims = decode_claims(token)?;
    check_expiry(&claims, now)?;
    Ok(claims)
}

/// True when `token` is a well-formed JWT that has not expired at `now`.
pub fn is_valid_token(token: &str, now: DateTime<Utc>) -> bool {
    validate_token(token, now).is_ok()
}

/// Remaining lifetime of a valid token, in whole seconds.
pub fn seconds_until_expiry(token: &str, now: DateTime<Utc>) -> Option<i64> {
    validate_token(token, now)
        .ok()
        .map(|claims| claims.exp - now.timestamp())
}

/// Sign claims as an HS256 JWT.
pub fn encode_claims(
    claims: &SessionClaims,
    secret: &[u8],
) -> Result<String, jsonwebtoken::errors::Error> {
    jsonwebtoken::encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn token_expiring_in(ttl: Duration) -> String {
        let claims = SessionClaims::for_user(&AuthUser::demo(), now(), ttl);
        encode_claims(&claims, b"test-secret").unwrap()
    }

    #[test]
    fn fresh_token_is_valid() {
        let token = token_expiring_in(Duration::hours(1));
        assert!(is_valid_token(&token, now()));
        assert_eq!(seconds_until_expiry(&token, now()), Some(3600));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "123");
        assert_eq!(claims.email.as_deref(), Some("demo@minimals.cc"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = token_expiring_in(Duration::hours(1));
        let later = now() + Duration::hours(2);

        assert!(!is_valid_token(&token, later));
        assert_eq!(validate_token(&token, later), Err(TokenValidationError::Expired));
        assert_eq!(seconds_until_expiry(&token, later), None);
    }

    #[test]
    fn token_is_expired_exactly_at_exp() {
        let token = token_expiring_in(Duration::seconds(30));
        assert!(!is_valid_token(&token, now() + Duration::seconds(30)));
    }

    #[test]
    fn opaque_strings_are_malformed() {
        for token in ["", "dummy-token-1234567890", "a.b.c", "not.a.jwt.at.all"] {
            assert!(matches!(
                validate_token(token, now()),
                Err(TokenValidationError::Malformed(_))
            ));
        }
    }

    #[test]
    fn token_without_exp_is_malformed() {
        #[derive(Serialize)]
        struct NoExp {
            sub: &'static str,
        }

        let token = jsonwebtoken::encode(
            &Header::default(),
            &NoExp { sub: "123" },
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap();

        assert!(matches!(
            decode_claims(&token),
            Err(TokenValidationError::Malformed(_))
        ));
    }

    #[test]
    fn signature_is_not_checked() {
        let claims = SessionClaims::for_user(&AuthUser::demo(), now(), Duration::hours(1));
        let token = encode_claims(&claims, b"some-other-issuer").unwrap();
        assert!(is_valid_token(&token, now()));
    }

    #[test]
    fn token_issued_slightly_in_the_future_is_still_valid() {
        let ahead = now() + Duration::seconds(5);
        let claims = SessionClaims::for_user(&AuthUser::demo(), ahead, Duration::hours(1));
        let token = encode_claims(&claims, b"fast-clock").unwrap();

        assert!(is_valid_token(&token, now()));
        assert_eq!(
            validate_claims(&claims, now()),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn inverted_window_is_only_rejected_by_the_strict_check() {
        let claims = SessionClaims {
            sub: "123".into(),
            email: None,
            iat: Some(now().timestamp() + 7200),
            exp: now().timestamp() + 3600,
        };
        let token = encode_claims(&claims, b"k").unwrap();

        assert!(is_valid_token(&token, now()));
        assert_eq!(
            validate_claims(&claims, now()),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn claims_time_window_rules() {
        let base = SessionClaims {
            sub: "123".into(),
            email: None,
            iat: Some(now().timestamp()),
            exp: now().timestamp() + 60,
        };
        assert_eq!(validate_claims(&base, now()), Ok(()));

        let inverted = SessionClaims {
            exp: now().timestamp() - 60,
            ..base.clone()
        };
        assert_eq!(
            validate_claims(&inverted, now()),
            Err(TokenValidationError::InvalidTimeWindow)
        );

        assert_eq!(
            validate_claims(&base, now() - Duration::seconds(1)),
            Err(TokenValidationError::NotYetValid)
        );

        let no_iat = SessionClaims { iat: None, ..base };
        assert_eq!(validate_claims(&no_iat, now()), Ok(()));
    }
}
