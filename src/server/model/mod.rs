//! Domain models and operation-specific parameter types.
//!
//! Entities cross into these types at the repository boundary; services and
//! controllers never touch raw entity models or stored role/status strings.

pub mod trip;
pub mod user;
