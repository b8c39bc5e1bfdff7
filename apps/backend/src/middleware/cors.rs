use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use crate::middleware::request_trace::TRACE_ID_HEADER;

/// Storefront and local development origins.
pub const DEFAULT_ORIGINS: [&str; 4] = [
    "https://pzm.ae",
    "https://www.pzm.ae",
    "http://localhost:5173",
    "http://localhost:3000",
];

/// Parse a comma-separated origin list, dropping blanks, `null`, and
/// anything without an http(s) scheme.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// Origins from `CORS_ALLOWED_ORIGINS`, or [`DEFAULT_ORIGINS`] when nothing valid is set.
pub fn allowed_origins() -> Vec<String> {
    let configured = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
    if configured.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    }
}

pub fn cors_middleware() -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_ID_HEADER)])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins() {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filters_junk() {
        assert_eq!(
            parse_origins(" https://pzm.ae, ,null,ftp://x, http://localhost:5173 "),
            vec!["https://pzm.ae".to_string(), "http://localhost:5173".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    #[serial_test::serial]
    fn falls_back_to_defaults() {
        env::remove_var("CORS_ALLOWED_ORIGINS");
        assert_eq!(allowed_origins(), DEFAULT_ORIGINS.map(String::from).to_vec());

        env::set_var("CORS_ALLOWED_ORIGINS", "https://admin.pzm.ae");
        assert_eq!(allowed_origins(), vec!["https://admin.pzm.ae".to_string()]);
        env::remove_var("CORS_ALLOWED_ORIGINS");
    }
}
