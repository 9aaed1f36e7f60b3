/**
 * Token Codec
 *
 * This module issues and verifies the signed, expiring tokens that assert a
 * user's identity. Tokens are compact JWT strings: three base64url segments
 * (header, payload, signature) joined by dots, signed with HMAC-SHA256.
 *
 * The signing secret is injected at construction. There is no ambient
 * global and no hot rotation: restarting with a new secret invalidates all
 * outstanding tokens. There is also no revocation list, so a token stays
 * valid until its expiry regardless of server-side state changes.
 */

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::auth::Role;

/// Tokens expire 72 hours after issuance.
pub const TOKEN_TTL: Duration = Duration::from_secs(72 * 60 * 60);

/// Claims carried by every token.
///
/// The minimum claim set: subject id, role, and expiry. `iat` is included
/// for debuggability.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's database id
    pub sub: i64,
    /// Role asserted at issuance. A later role change does not
    /// retroactively update outstanding tokens.
    pub role: Role,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
    /// Issued-at time (Unix timestamp, seconds)
    pub iat: u64,
}

/// Why a token failed verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("token signature mismatch")]
    SignatureMismatch,
    #[error("malformed token")]
    Malformed,
}

/// Issues and verifies signed identity tokens.
///
/// Cheap to clone; safe to share across request handlers. Verification is a
/// pure CPU-bound computation with no side effects.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec with the standard 72-hour expiry.
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, TOKEN_TTL)
    }

    /// Create a codec with a custom expiry.
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a signed token asserting `(user_id, role)` until `now + ttl`.
    pub fn issue(&self, user_id: i64, role: Role) -> Result<String, TokenError> {
        let now = unix_now();

        let claims = Claims {
            sub: user_id,
            role,
            exp: now + self.ttl.as_secs(),
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Malformed)
    }

    /// Verify a token and return its claims.
    ///
    /// The signature is recomputed and checked before any claim is
    /// inspected; a tampered token reports `SignatureMismatch` even if it
    /// is also expired. Expiry is exact: no clock-skew leeway.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
