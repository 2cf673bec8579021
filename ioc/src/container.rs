//! The main `Container` struct and its associated methods.

use crate::config::{BindingPolicy, ContainerConfig};
use crate::core::{next_container_id, Definition, ResolutionGuard, Value};
use crate::descriptor::{Arguments, ParamDescriptor, ParamKind};
use crate::error::{Error, Result};
use crate::introspect::{ClassRegistry, TypeIntrospector};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::ReentrantMutex;
use std::any::{type_name, Any};
use std::sync::Arc;

/// The Inversion of Control (IoC) container.
///
/// Entries are keyed by string identifiers. An identifier resolves either
/// through an explicit binding or, failing that, by autowiring a class the
/// container's [`TypeIntrospector`] knows under that name. Every successful
/// resolution is cached: the container hands out one instance per
/// identifier for its whole lifetime.
///
/// The container is thread-safe. Registration and every `get` call chain run
/// under one container-wide reentrant lock, so a chain started on one thread
/// completes (or fails) before another thread's chain begins. A singleton's
/// factory therefore runs at most once, and a dependency cycle is always
/// reported as [`Error::CircularDependency`] by the thread that walks it.
/// A factory must not wait on another thread that resolves from the same
/// container.
pub struct Container {
  id: u64,
  config: ContainerConfig,
  lock: ReentrantMutex<()>,
  bindings: DashMap<String, Definition>,
  instances: DashMap<String, Value>,
  introspector: Arc<dyn TypeIntrospector>,
}

impl Default for Container {
  fn default() -> Self {
    Self::with_config(ContainerConfig::default())
  }
}

impl Container {
  /// Creates a new, empty `Container` with the strict binding policy.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: ContainerConfig) -> Self {
    Self {
      id: next_container_id(),
      config,
      lock: ReentrantMutex::new(()),
      bindings: DashMap::new(),
      instances: DashMap::new(),
      introspector: Arc::new(ClassRegistry::new()),
    }
  }

  /// Replaces the class source used for autowiring.
  pub fn with_introspector(mut self, introspector: impl TypeIntrospector + 'static) -> Self {
    self.introspector = Arc::new(introspector);
    self
  }

  pub fn config(&self) -> &ContainerConfig {
    &self.config
  }

  // --- Registration ---

  /// Binds a factory under `id`.
  ///
  /// The factory receives the container, so it can resolve its own
  /// dependencies. Under [`BindingPolicy::Reject`] a second `bind` for the
  /// same `id` fails with [`Error::DuplicateBinding`].
  pub fn bind<T, F>(&self, id: &str, factory: F) -> Result<()>
  where
    T: Any + Send + Sync,
    F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
  {
    self.bind_definition(
      id,
      Arc::new(move |c: &Container| factory(c).map(|v| Arc::new(v) as Value)),
    )
  }

  /// Binds a pre-built value under `id`.
  pub fn bind_instance<T: Any + Send + Sync>(&self, id: &str, instance: T) -> Result<()> {
    let value: Value = Arc::new(instance);
    self.bind_definition(id, Arc::new(move |_: &Container| Ok(Arc::clone(&value))))
  }

  /// Binds an already type-erased definition under `id`.
  pub fn bind_definition(&self, id: &str, definition: Definition) -> Result<()> {
    let _lock = self.lock.lock();
    match self.bindings.entry(id.to_owned()) {
      Entry::Vacant(entry) => {
        entry.insert(definition);
      }
      Entry::Occupied(mut entry) => match self.config.binding_policy {
        BindingPolicy::Reject => return Err(Error::DuplicateBinding(id.to_owned())),
        BindingPolicy::Overwrite => {
          tracing::warn!(id, "overwriting existing binding");
          entry.insert(definition);
        }
      },
    }
    tracing::debug!(id, "bound definition");
    Ok(())
  }

  /// `true` iff an explicit binding exists for `id`.
  ///
  /// This says nothing about classes that could be autowired under `id`.
  pub fn has(&self, id: &str) -> bool {
    self.bindings.contains_key(id)
  }

  /// `true` once `id` has been resolved and cached.
  pub fn resolved(&self, id: &str) -> bool {
    self.cached(id).is_some()
  }

  // --- Resolution ---

  /// Resolves `id`, returning the cached instance on every later call.
  ///
  /// Errors raised by a bound factory are returned exactly as the factory
  /// produced them.
  pub fn get(&self, id: &str) -> Result<Value> {
    if let Some(value) = self.cached(id) {
      tracing::trace!(id, "cache hit");
      return Ok(value);
    }

    // Held until the outermost `get` of this chain returns; nested calls re-enter it.
    let _lock = self.lock.lock();
    // Another thread may have filled the entry while this one was waiting.
    if let Some(value) = self.cached(id) {
      return Ok(value);
    }

    // Removed from the frame on every exit from this function.
    let _guard = ResolutionGuard::enter(self.id, id)?;

    let definition = self.bindings.get(id).map(|entry| Arc::clone(entry.value()));
    if let Some(definition) = definition {
      return self.fill(id, || definition(self));
    }

    if self.introspector.is_known(id) {
      return self.fill(id, || self.autowire(id));
    }

    Err(Error::NotFound(id.to_owned()))
  }

  /// Resolves `id` and downcasts the instance to `T`.
  pub fn get_as<T: Any + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
    self.get(id)?.downcast::<T>().map_err(|_| Error::TypeMismatch {
      id: id.to_owned(),
      expected: type_name::<T>(),
    })
  }

  /// Resolves `T` under its fully-qualified type name.
  pub fn resolve<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
    self.get_as::<T>(type_name::<T>())
  }

  // --- PRIVATE HELPERS ---

  fn cached(&self, id: &str) -> Option<Value> {
    self
      .instances
      .get(id)
      .map(|entry| Arc::clone(entry.value()))
  }

  /// Runs `init` and caches its value. Nothing is stored when `init` fails.
  fn fill(&self, id: &str, init: impl FnOnce() -> Result<Value>) -> Result<Value> {
    let value = init()?;
    // An entry, once present, is never replaced.
    let cached = Arc::clone(self.instances.entry(id.to_owned()).or_insert(value).value());
    tracing::debug!(id, "cached instance");
    Ok(cached)
  }

  fn autowire(&self, id: &str) -> Result<Value> {
    if !self.introspector.is_instantiable(id)? {
      return Err(Error::NotInstantiable(id.to_owned()));
    }

    let params = self.introspector.constructor_params(id)?;
    tracing::debug!(class = id, params = params.len(), "autowiring class");

    let mut args = Arguments::new(id);
    for param in &params {
      let value = self.resolve_parameter(param)?;
      args.push(param.name(), value);
    }

    self.introspector.instantiate(id, &mut args)
  }

  fn resolve_parameter(&self, param: &ParamDescriptor) -> Result<Option<Value>> {
    tracing::trace!(param = param.name(), kind = ?param.kind(), "resolving parameter");

    if let ParamKind::Service(dependency) = param.kind() {
      return match (self.get(dependency), param.default()) {
        (Ok(value), _) => Ok(Some(value)),
        // An optional service falls back only when nothing provides it at all.
        (Err(Error::NotFound(missing)), Some(default)) if missing == *dependency => {
          Ok(default.produce())
        }
        (Err(err), _) => Err(err),
      };
    }

    match param.default() {
      Some(default) => Ok(default.produce()),
      None => Err(Error::UnresolvableDependency(param.name().to_owned())),
    }
  }
}
