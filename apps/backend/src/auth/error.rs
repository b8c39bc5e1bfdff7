use thiserror::Error;

/// Problems setting up or using the credential subsystem.
///
/// Token and password verification never produce these; they collapse to a
/// negative result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("admin secret must not be empty")]
    EmptySecret,
    #[error("admin secret rejected by HMAC key setup")]
    InvalidKey,
    #[error("unknown password mode '{0}'")]
    UnknownPasswordMode(String),
    #[error("failed to encode token segment: {0}")]
    Encode(String),
}

impl From<super::codec::CodecError> for AuthError {
    fn from(e: super::codec::CodecError) -> Self {
        AuthError::Encode(e.to_string())
    }
}
