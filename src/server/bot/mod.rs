//! Chat bot front end for the ride coordination service.
//!
//! The bot mirrors the HTTP API's trip lifecycle over chat commands: users
//! register with a role, passengers request trips, and admins assign drivers
//! and close trips out. Accounts created through the bot are keyed by the
//! chat platform's user id and have no password, so they cannot log in over
//! HTTP.
//!
//! The bot is started during server startup in its own tokio task so it never
//! blocks the HTTP server. It shares the same database and services as the
//! HTTP controllers, so the lifecycle rules are enforced identically on both
//! surfaces.

pub mod command;
pub mod handler;
pub mod start;
