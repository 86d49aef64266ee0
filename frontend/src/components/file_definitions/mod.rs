pub mod associate;
pub mod list;
