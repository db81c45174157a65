//! Configuration file loading and default merging.

use std::collections::HashMap;
use std::path::Path;

use serde_yaml::Value;

use crate::utilities::errors::{CrewError, CrewResult};

/// A top-level YAML mapping keyed by agent or task name.
pub type ConfigMap = HashMap<String, Value>;

/// Process a configuration entry, merging defaults with overrides.
///
/// Keys present in `config` win over `defaults`. Non-mapping entries are
/// returned unchanged so the typed deserialization reports them.
pub fn process_config(config: &Value, defaults: &[(&str, Value)]) -> Value {
    let Value::Mapping(entry) = config else {
        return config.clone();
    };

    let mut merged = serde_yaml::Mapping::new();
    for (key, value) in defaults {
        merged.insert(Value::String((*key).to_string()), value.clone());
    }
    for (key, value) in entry {
        merged.insert(key.clone(), value.clone());
    }
    Value::Mapping(merged)
}

/// Parse a YAML document whose top level is a mapping of named entries.
///
/// An empty document yields an empty map.
pub fn parse_config_map(source: &str, path: &Path) -> CrewResult<ConfigMap> {
    let document: Value = serde_yaml::from_str(source).map_err(|source| CrewError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        Value::Null => Ok(ConfigMap::new()),
        Value::Mapping(mapping) => {
            let mut map = ConfigMap::with_capacity(mapping.len());
            for (key, value) in mapping {
                let Value::String(name) = key else {
                    return Err(CrewError::configuration(format!(
                        "{}: top-level keys must be strings, found {:?}",
                        path.display(),
                        key
                    )));
                };
                map.insert(name, value);
            }
            Ok(map)
        }
        other => Err(CrewError::configuration(format!(
            "{}: expected a mapping of named entries, found {}",
            path.display(),
            value_kind(&other)
        ))),
    }
}

/// Read and parse a YAML mapping file.
pub fn load_config_map(path: impl AsRef<Path>) -> CrewResult<ConfigMap> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| CrewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded configuration file {}", path.display());
    parse_config_map(&source, path)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
