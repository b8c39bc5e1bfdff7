//! Admin password digests.
//!
//! Stored credentials are the lower-case hex SHA-256 of the UTF-8 password.
//! How a submitted value is compared against them depends on [`PasswordMode`].

use std::fmt;
use std::str::FromStr;

use hmac::digest::{CtOutput, Output};
use sha2::{Digest, Sha256};

use super::error::AuthError;

/// How a submitted login secret relates to the stored digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordMode {
    /// The client sends the plaintext; the server hashes it before comparing.
    #[default]
    ServerSideHash,
    /// The client sends an already-computed hex digest that is compared as-is.
    ///
    /// The digest then is the shared secret: anyone holding the stored hash
    /// can log in. Only for clients that cannot be changed.
    ClientPrecomputedHash,
}

impl PasswordMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ServerSideHash => "server_side_hash",
            Self::ClientPrecomputedHash => "client_precomputed_hash",
        }
    }
}

impl fmt::Display for PasswordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordMode {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server_side_hash" => Ok(Self::ServerSideHash),
            "client_precomputed_hash" => Ok(Self::ClientPrecomputedHash),
            other => Err(AuthError::UnknownPasswordMode(other.to_string())),
        }
    }
}

/// SHA-256 of the UTF-8 bytes of `plaintext`, as 64 lower-case hex chars.
pub fn hash_password(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

/// Compare a submitted secret with a stored digest in fixed time.
///
/// Values that are not 64-char hex digests never match.
pub fn verify_password(submitted: &str, stored_hash: &str, mode: PasswordMode) -> bool {
    let Some(stored) = parse_digest(stored_hash) else {
        return false;
    };

    let submitted = match mode {
        PasswordMode::ServerSideHash => Sha256::digest(submitted.as_bytes()),
        PasswordMode::ClientPrecomputedHash => match parse_digest(submitted) {
            Some(digest) => digest,
            None => return false,
        },
    };

    CtOutput::<Sha256>::new(submitted) == CtOutput::<Sha256>::new(stored)
}

fn parse_digest(hex_digest: &str) -> Option<Output<Sha256>> {
    let mut digest = Output::<Sha256>::default();
    hex::decode_to_slice(hex_digest, &mut digest).ok()?;
    Some(digest)
}
