pub mod analyze;
pub mod check_path;
pub mod config;
pub mod demo;
