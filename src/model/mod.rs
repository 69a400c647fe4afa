//! Wire-format DTOs shared by the HTTP API.
//!
//! These are the serde-facing request and response records. Controllers
//! convert between DTOs and the domain/parameter models in `server::model`.

pub mod api;
pub mod trip;
pub mod user;
