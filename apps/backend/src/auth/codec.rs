//! Compact, URL-safe text encoding for token segments.
//!
//! Every segment is base64url without `=` padding. Structured segments
//! (header, claims) are compact JSON serialized in struct field order, so the
//! bytes produced at issuance are the bytes that get signed.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// base64url engine: never pads on output and refuses padded input.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

pub const ALGORITHM: &str = "HS256";
pub const TOKEN_TYPE: &str = "JWT";

/// Fixed header carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl TokenHeader {
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `value` to compact JSON and encode it as a segment.
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, CodecError> {
    let json = serde_json::to_vec(value)?;
    Ok(encode_bytes(&json))
}

/// Encode raw bytes (e.g. a signature tag) as a segment.
pub fn encode_bytes(bytes: &[u8]) -> String {
    SEGMENT_ENGINE.encode(bytes)
}

/// Decode a segment back to raw bytes.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, CodecError> {
    Ok(SEGMENT_ENGINE.decode(segment)?)
}

/// Decode a segment and parse it as JSON.
pub fn decode_json_segment<T: DeserializeOwned>(segment: &str) -> Result<T, CodecError> {
    let bytes = decode_segment(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}
