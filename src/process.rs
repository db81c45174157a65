//! Process types for crew execution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The process a crew follows to work through its tasks.
///
/// Crews are strictly sequential: no parallel branches, no conditional
/// skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Tasks are executed one after another in order.
    #[default]
    Sequential,
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Process::Sequential => write!(f, "sequential"),
        }
    }
}
