//! Wire model of the data quality REST API.
//!
//! All types serialize with camelCase keys, which is what the backend speaks.

pub mod association;
pub mod client;
pub mod field_definition;
pub mod file_definition;
pub mod record_match_criteria;
pub mod reference;
