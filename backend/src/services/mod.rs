pub mod console;
pub mod embedded;
