//! Error types for crew assembly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration and assembling a crew.
///
/// All of these are fatal at startup; nothing retries.
#[derive(Debug, Error)]
pub enum CrewError {
    /// A required key is absent or an entry is malformed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A task is bound to an agent that is not part of the configuration.
    #[error("Reference error: task '{task}' references unknown agent '{agent}'")]
    Reference { task: String, agent: String },

    /// A configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid YAML.
    #[error("Failed to parse configuration file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CrewError {
    /// Shorthand for a [`CrewError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from a missing or malformed configuration entry.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error came from a dangling task → agent link.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }
}

/// Result alias for crew assembly.
pub type CrewResult<T> = Result<T, CrewError>;
