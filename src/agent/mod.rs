//! Agent definitions.

pub mod core;

pub use self::core::Agent;
