//! HS256 bearer tokens asserting the admin identity.
//!
//! A token carries the identity as its `sub` claim and an absolute `exp`.
//! Validation checks signature and expiry with no clock leeway.

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// Default token lifetime: 8 hours.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 8 * 60;

/// Longest accepted token lifetime: 365 days.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 365 * 24 * 60;

/// JWT claims embedded in every admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the admin email.
    pub sub: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// A freshly signed token and its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Encoded JWT.
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

/// Mints and validates signed, time-limited admin tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Creates an issuer signing with `secret`; tokens live for `ttl`.
    #[must_use]
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Signs a token with `subject` as `sub` and `exp = now + ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if encoding fails or the expiry
    /// falls outside the representable time range.
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::Signing("token expiry out of range".to_string()))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        Ok(IssuedToken {
            token,
            expires_in: self.ttl.num_seconds(),
        })
    }

    /// Verifies signature and expiry and returns the embedded subject.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidOrExpired`] for a bad signature, a
    /// malformed token or a passed expiry.
    pub fn validate(&self, token: &str) -> Result<String, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| {
                tracing::debug!(reason = %e, "token rejected");
                AuthError::InvalidOrExpired
            })
    }

    /// Configured token lifetime.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
