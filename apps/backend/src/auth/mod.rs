pub mod bearer;
pub mod claims;
pub mod clock;
pub mod codec;
pub mod error;
pub mod password;
pub mod service;
pub mod signer;

pub use bearer::extract_bearer;
pub use claims::{Claims, NewClaims, ADMIN_PRINCIPAL, TOKEN_TTL_SECS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::AuthError;
pub use password::{hash_password, verify_password, PasswordMode};
pub use service::CredentialService;
pub use signer::SigningKey;
