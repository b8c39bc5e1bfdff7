//! Query functions over the credential tables (generic over ConnectionTrait).

pub mod admins;
