//! Error handling for the storefront backend.

pub mod error_code;

pub use error_code::ErrorCode;
