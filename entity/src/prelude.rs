pub use super::trip::Entity as Trip;
pub use super::user::Entity as User;
