//! HMAC-SHA256 integrity tags over `<header>.<payload>`.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Keyed signer built once from the admin secret.
///
/// The keyed HMAC state is cloned per operation; the secret itself is not
/// retained and never shows up in `Debug` output.
#[derive(Clone)]
pub struct SigningKey {
    mac: HmacSha256,
}

impl SigningKey {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, AuthError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(AuthError::EmptySecret);
        }

        let mac = HmacSha256::new_from_slice(secret).map_err(|_| AuthError::InvalidKey)?;
        Ok(Self { mac })
    }

    /// Compute the HMAC-SHA256 tag of `message`.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    /// Check `candidate` against the tag of `message` in fixed time.
    pub fn verify(&self, message: &[u8], candidate: &[u8]) -> bool {
        let mut mac = self.mac.clone();
        mac.update(message);
        mac.verify_slice(candidate).is_ok()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}
