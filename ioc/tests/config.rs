use fibre_autowire::{BindingPolicy, ConfigError, Container, ContainerConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn test_config_is_loaded_from_a_file() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  writeln!(file, "binding_policy: overwrite").unwrap();

  let config = ContainerConfig::from_file(file.path()).unwrap();

  assert_eq!(config.binding_policy, BindingPolicy::Overwrite);
  let container = Container::with_config(config);
  container.bind("value", |_| Ok(1_u8)).unwrap();
  assert!(container.bind("value", |_| Ok(2_u8)).is_ok());
}

#[test]
fn test_missing_config_file_is_an_io_error() {
  let dir = tempfile::tempdir().unwrap();

  let err = ContainerConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();

  assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_default_config_rejects_duplicates() {
  let container = Container::with_config(ContainerConfig::default());
  container.bind("value", |_| Ok(1_u8)).unwrap();

  assert!(container.bind("value", |_| Ok(2_u8)).is_err());
  assert_eq!(container.config().binding_policy, BindingPolicy::Reject);
}
