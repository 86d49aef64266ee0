//! # Console Service Module
//!
//! Endpoints the frontend calls on its own host, under `/console`. The data
//! quality REST API itself is a separate service the browser talks to
//! directly.
//!
//! ## Sub-modules:
//! - `config`: publishes the runtime [`common::config::ConsoleSettings`].

mod config;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/console";

/// Registered routes:
///
/// *   **`GET /config`**: `config::process`, the settings as JSON.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(config::process))
}
