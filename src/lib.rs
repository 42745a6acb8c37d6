//! urlcut is a URL shortening service backed by PostgreSQL.
//!
//! # Architecture
//!
//! The crate is split into four layers:
//!
//! - [`domain`] - entities and repository traits, no I/O
//! - [`application`] - services implementing the business rules
//! - [`infrastructure`] - PostgreSQL repository implementations
//! - [`api`] - axum handlers and request/response DTOs
//!
//! [`server::run`] wires the layers together and serves the HTTP API.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;
