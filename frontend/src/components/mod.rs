pub mod clients;
pub mod controls;
pub mod field_definitions;
pub mod file_definitions;
pub mod helpers;
pub mod home;
pub mod record_match_criteria;
