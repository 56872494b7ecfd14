//! Student management API server library.
//!
//! Exposes the building blocks (config, state, error handling, service,
//! routes, OpenAPI document) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod services;
pub mod startup;
pub mod state;
