//! Container configuration.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// What `bind` does when the identifier is already bound.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BindingPolicy {
  /// Fail with `Error::DuplicateBinding`.
  #[default]
  Reject,
  /// Replace the factory. An instance that was already resolved stays cached.
  Overwrite,
}

/// Settings for a [`Container`](crate::Container).
///
/// ```yaml
/// binding_policy: overwrite
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ContainerConfig {
  #[serde(default)]
  pub binding_policy: BindingPolicy,
}

impl ContainerConfig {
  pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
    Ok(serde_yaml::from_str(source)?)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let source = std::fs::read_to_string(path)?;
    Self::from_yaml_str(&source)
  }
}
