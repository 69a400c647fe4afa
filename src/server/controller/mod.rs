pub mod auth;
pub mod trip;
pub mod user;
