//! Issuance and verification of admin session tokens.

use std::sync::Arc;

use tracing::debug;

use super::bearer;
use super::claims::{Claims, NewClaims};
use super::clock::{Clock, SystemClock};
use super::codec::{self, TokenHeader};
use super::error::AuthError;
use super::password::{self, PasswordMode};
use super::signer::SigningKey;
use crate::state::security_config::SecurityConfig;

/// Why a token was turned away. Only ever logged; callers see `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    BadSignature,
    BadClaims,
    Expired,
}

impl Rejection {
    fn as_str(&self) -> &'static str {
        match self {
            Rejection::Malformed => "malformed",
            Rejection::BadSignature => "bad_signature",
            Rejection::BadClaims => "bad_claims",
            Rejection::Expired => "expired",
        }
    }
}

/// Credential service shared by all requests.
///
/// Holds the signing key derived from the admin secret, the clock used for
/// `iat`/`exp`, and the configured password comparison mode.
#[derive(Debug, Clone)]
pub struct CredentialService {
    key: SigningKey,
    clock: Arc<dyn Clock>,
    password_mode: PasswordMode,
}

impl CredentialService {
    pub fn new(security: &SecurityConfig) -> Result<Self, AuthError> {
        Self::with_clock(security, Arc::new(SystemClock))
    }

    pub fn with_clock(security: &SecurityConfig, clock: Arc<dyn Clock>) -> Result<Self, AuthError> {
        Ok(Self {
            key: SigningKey::new(security.admin_secret())?,
            clock,
            password_mode: security.password_mode,
        })
    }

    pub fn password_mode(&self) -> PasswordMode {
        self.password_mode
    }

    pub fn extract_bearer(&self, header_value: Option<&str>) -> Option<String> {
        bearer::extract_bearer(header_value)
    }

    /// Mint a token for `claims`, valid for 24 hours from now.
    ///
    /// Fails only if serialization fails, which does not happen for
    /// [`Claims`].
    pub fn issue(&self, claims: NewClaims) -> Result<String, AuthError> {
        let claims = Claims::from_new(claims, self.clock.now_unix());

        let header = codec::encode_segment(&TokenHeader::hs256())?;
        let payload = codec::encode_segment(&claims)?;
        let signing_input = format!("{header}.{payload}");
        let signature = codec::encode_bytes(&self.key.sign(signing_input.as_bytes()));

        Ok(format!("{signing_input}.{signature}"))
    }

    /// Verify a token and return its claims.
    ///
    /// Every failure (shape, signature, payload, expiry) yields `None`.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match self.check(token) {
            Ok(claims) => Some(claims),
            Err(rejection) => {
                debug!(reason = rejection.as_str(), "token rejected");
                None
            }
        }
    }

    fn check(&self, token: &str) -> Result<Claims, Rejection> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(Rejection::Malformed);
        };
        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(Rejection::Malformed);
        }

        // The signature covers the received segments byte for byte.
        let signing_input = &token[..header.len() + 1 + payload.len()];
        let tag = codec::decode_segment(signature).map_err(|_| Rejection::BadSignature)?;
        if !self.key.verify(signing_input.as_bytes(), &tag) {
            return Err(Rejection::BadSignature);
        }

        let claims: Claims =
            codec::decode_json_segment(payload).map_err(|_| Rejection::BadClaims)?;

        if claims.is_expired_at(self.clock.now_unix()) {
            return Err(Rejection::Expired);
        }

        Ok(claims)
    }

    pub fn hash_password(&self, plaintext: &str) -> String {
        password::hash_password(plaintext)
    }

    /// Check a submitted login secret against the stored digest using the
    /// configured [`PasswordMode`].
    pub fn verify_password(&self, submitted: &str, stored_hash: &str) -> bool {
        password::verify_password(submitted, stored_hash, self.password_mode)
    }
}
