pub mod dialog;
pub mod view;
