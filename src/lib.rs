//! The `taskdeck` library crate.
//!
//! Contains the domain models, token-based authentication, routing
//! configuration, and error handling for the TaskDeck API. The binary
//! (`main.rs`) wires these together into an HTTP server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
