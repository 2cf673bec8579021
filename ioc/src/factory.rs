//! Bulk bootstrap of a container from a list of definitions.

use crate::container::Container;
use crate::core::{Definition, Value};
use crate::error::Result;
use std::any::Any;
use std::sync::Arc;

/// Type-erases a typed factory so it can sit in a definition list next to
/// factories producing other types.
pub fn definition<T, F>(factory: F) -> Definition
where
  T: Any + Send + Sync,
  F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
{
  Arc::new(move |c: &Container| factory(c).map(|v| Arc::new(v) as Value))
}

/// Builds containers from `(id, definition)` pairs.
pub struct ContainerFactory;

impl ContainerFactory {
  /// Creates a fresh container and binds every definition in iteration order.
  ///
  /// The first failing `bind` (for instance a duplicate id) is returned and
  /// the half-built container is dropped.
  ///
  /// # Examples
  ///
  /// ```
  /// use fibre_autowire::{definitions, ContainerFactory};
  ///
  /// let container = ContainerFactory::from_definitions(definitions! {
  ///   "latency" => |_| Ok(123_u32),
  ///   "greeting" => |_| Ok(String::from("hello")),
  /// })
  /// .unwrap();
  ///
  /// assert!(container.has("latency"));
  /// assert_eq!(*container.get_as::<u32>("latency").unwrap(), 123);
  /// ```
  pub fn from_definitions<I, K>(definitions: I) -> Result<Container>
  where
    I: IntoIterator<Item = (K, Definition)>,
    K: AsRef<str>,
  {
    Self::from_definitions_with(Container::new(), definitions)
  }

  /// Binds every definition into an already configured container.
  pub fn from_definitions_with<I, K>(container: Container, definitions: I) -> Result<Container>
  where
    I: IntoIterator<Item = (K, Definition)>,
    K: AsRef<str>,
  {
    let mut count = 0usize;
    for (id, definition) in definitions {
      container.bind_definition(id.as_ref(), definition)?;
      count += 1;
    }
    tracing::debug!(definitions = count, "container built from definitions");
    Ok(container)
  }
}
