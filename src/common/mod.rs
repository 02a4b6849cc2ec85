pub mod config;
pub mod constants;
pub mod types;
pub mod vector_ops;
