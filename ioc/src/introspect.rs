//! The introspection capability used for autowiring, and its registry-backed implementation.

use crate::core::Value;
use crate::descriptor::{Arguments, ClassDescriptor, Injectable, ParamDescriptor};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Supplies constructor metadata for class identifiers.
///
/// The container only ever asks about identifiers that have no explicit
/// binding. Implementations must be safe to share between threads.
pub trait TypeIntrospector: Send + Sync {
  /// Whether `id` names a class this introspector can describe.
  fn is_known(&self, id: &str) -> bool;

  fn is_instantiable(&self, id: &str) -> Result<bool>;

  fn constructor_params(&self, id: &str) -> Result<Vec<ParamDescriptor>>;

  /// Builds the class from arguments resolved in parameter order.
  fn instantiate(&self, id: &str, args: &mut Arguments) -> Result<Value>;
}

/// An explicit class registry, populated at startup.
#[derive(Default, Clone, Debug)]
pub struct ClassRegistry {
  classes: HashMap<String, ClassDescriptor>,
}

impl ClassRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `T` under `std::any::type_name::<T>()`.
  pub fn register<T: Injectable>(&mut self) -> &mut Self {
    self.register_descriptor(ClassDescriptor::of::<T>())
  }

  /// Registers a descriptor, replacing any earlier one with the same id.
  pub fn register_descriptor(&mut self, descriptor: ClassDescriptor) -> &mut Self {
    tracing::debug!(class = descriptor.id(), "registering class descriptor");
    self.classes.insert(descriptor.id().to_owned(), descriptor);
    self
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }

  fn lookup(&self, id: &str) -> Result<&ClassDescriptor> {
    self
      .classes
      .get(id)
      .ok_or_else(|| Error::reflection(id, "class is not registered"))
  }
}

impl TypeIntrospector for ClassRegistry {
  fn is_known(&self, id: &str) -> bool {
    self.classes.contains_key(id)
  }

  fn is_instantiable(&self, id: &str) -> Result<bool> {
    self.lookup(id).map(ClassDescriptor::is_instantiable)
  }

  fn constructor_params(&self, id: &str) -> Result<Vec<ParamDescriptor>> {
    self.lookup(id).map(|class| class.params().to_vec())
  }

  fn instantiate(&self, id: &str, args: &mut Arguments) -> Result<Value> {
    self.lookup(id)?.construct(args)
  }
}
