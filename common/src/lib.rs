//! Shared domain crate for the data quality admin console.
//!
//! Everything in here is plain Rust with no browser dependency, so the
//! frontend (compiled to wasm) and the host binary can both use it and the
//! logic can be unit tested natively.

pub mod cache;
pub mod capabilities;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod query;
pub mod routes;
pub mod view_model;
