pub mod bearer_claims;
pub mod json_body;

pub use bearer_claims::{AdminClaims, BearerClaims};
pub use json_body::JsonBody;
