//! SeaORM entity models for the rideboard database schema.

pub mod prelude;

pub mod trip;
pub mod user;
