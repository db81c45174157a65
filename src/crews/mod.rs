//! Concrete crew projects.

pub mod research_crew;

pub use research_crew::{research_crew, research_crew_base};
