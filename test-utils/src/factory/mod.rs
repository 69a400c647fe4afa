//! Entity factories for constructing test data.
//!
//! Factories insert entities with sensible defaults and expose builder-style
//! setters for the fields a test needs to control. Use them instead of raw
//! `ActiveModel` literals to keep tests focused on behavior.

pub mod helpers;
pub mod trip;
pub mod user;
