use thiserror::Error;

/// A boxed error raised by user code inside a factory or constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for `fibre_autowire` resolution and registration.
#[derive(Debug, Error)]
pub enum Error {
  #[error("No binding for \"{0}\" could be found.")]
  NotFound(String),

  #[error("Circular dependency detected while trying to resolve {0}")]
  CircularDependency(String),

  #[error("Class {0} is not instantiable.")]
  NotInstantiable(String),

  #[error("Unable to resolve dependency {0}")]
  UnresolvableDependency(String),

  #[error("Unable to reflect class {id}: {message}")]
  ReflectionFailure { id: String, message: String },

  #[error("{0} is already defined")]
  DuplicateBinding(String),

  #[error("Entry \"{id}\" does not hold a value of type {expected}")]
  TypeMismatch { id: String, expected: &'static str },

  /// An error produced by a user factory. The container never creates this
  /// variant itself and passes it through `get` untouched.
  #[error(transparent)]
  Factory(BoxError),
}

impl Error {
  /// Wraps an arbitrary error raised inside a factory.
  pub fn factory(err: impl Into<BoxError>) -> Self {
    Error::Factory(err.into())
  }

  /// Returns the factory error as `E`, if this is a factory error of that type.
  pub fn factory_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
    match self {
      Error::Factory(inner) => inner.downcast_ref::<E>(),
      _ => None,
    }
  }

  /// `true` when the container's own mechanics failed, as opposed to
  /// user factory logic.
  pub fn is_container_error(&self) -> bool {
    !matches!(self, Error::Factory(_))
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::NotFound(_))
  }

  pub(crate) fn reflection(id: &str, message: impl Into<String>) -> Self {
    Error::ReflectionFailure {
      id: id.to_owned(),
      message: message.into(),
    }
  }
}

/// Errors raised while loading a [`ContainerConfig`](crate::ContainerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to read configuration file: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  Parse(#[from] serde_yaml::Error),
}

/// A specialized `Result` type for `fibre_autowire` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
