//! Utility modules: configuration loading, errors, console output and the
//! provider diagnostics.

pub mod config;
pub mod env_check;
pub mod errors;
pub mod logger;
pub mod printer;
