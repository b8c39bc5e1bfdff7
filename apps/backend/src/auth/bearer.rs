pub const BEARER_SCHEME: &str = "Bearer";

/// Pull the token out of an `Authorization` header value.
///
/// Only the exact shape `Bearer <token>` (one space, two parts) yields a
/// token. Anything else is treated as "no token", not as an error.
pub fn extract_bearer(header_value: Option<&str>) -> Option<String> {
    let mut parts = header_value?.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Some(token.to_string()),
        _ => None,
    }
}
