pub mod admin_users;

pub use admin_users::Entity as AdminUsers;
pub use admin_users::Model as AdminUser;
