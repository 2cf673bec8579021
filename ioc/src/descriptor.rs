//! Constructor descriptors: what the container knows about a class it may autowire.

use crate::core::Value;
use crate::error::{Error, Result};
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// How a constructor parameter's declared type is treated during autowiring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamKind {
  /// A class or trait-object type, resolved by recursively calling `get` with
  /// the type name as identifier.
  Service(String),
  /// A primitive or plain value type. Only a default can satisfy it.
  Builtin(String),
  /// No declared type.
  Untyped,
}

/// The fallback for a parameter that the container cannot wire itself.
#[derive(Clone)]
pub enum DefaultValue {
  /// The parameter is optional and defaults to nothing.
  Absent,
  /// A fresh default is produced on every construction.
  Value(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl DefaultValue {
  pub(crate) fn produce(&self) -> Option<Value> {
    match self {
      DefaultValue::Absent => None,
      DefaultValue::Value(producer) => Some(producer()),
    }
  }
}

impl fmt::Debug for DefaultValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DefaultValue::Absent => write!(f, "Absent"),
      DefaultValue::Value(_) => write!(f, "Value(..)"),
    }
  }
}

/// One constructor parameter, in declaration order.
#[derive(Clone, Debug)]
pub struct ParamDescriptor {
  name: String,
  kind: ParamKind,
  default: Option<DefaultValue>,
}

impl ParamDescriptor {
  /// A parameter whose type `T` is itself resolved from the container.
  pub fn service<T: ?Sized + Any>(name: &str) -> Self {
    Self::new(name, ParamKind::Service(type_name::<T>().to_owned()))
  }

  /// A service parameter keyed by an explicit identifier instead of a type name.
  pub fn service_id(name: &str, id: &str) -> Self {
    Self::new(name, ParamKind::Service(id.to_owned()))
  }

  /// A primitive parameter of type `T`.
  pub fn builtin<T: ?Sized + Any>(name: &str) -> Self {
    Self::new(name, ParamKind::Builtin(type_name::<T>().to_owned()))
  }

  pub fn untyped(name: &str) -> Self {
    Self::new(name, ParamKind::Untyped)
  }

  fn new(name: &str, kind: ParamKind) -> Self {
    Self {
      name: name.to_owned(),
      kind,
      default: None,
    }
  }

  /// Sets the default produced when the container cannot supply a value.
  pub fn with_default<T, F>(mut self, producer: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn() -> T + Send + Sync + 'static,
  {
    self.default = Some(DefaultValue::Value(Arc::new(move || {
      Arc::new(producer()) as Value
    })));
    self
  }

  /// Marks the parameter as optional, defaulting to absent.
  pub fn optional(mut self) -> Self {
    self.default = Some(DefaultValue::Absent);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn kind(&self) -> &ParamKind {
    &self.kind
  }

  pub fn default(&self) -> Option<&DefaultValue> {
    self.default.as_ref()
  }

  pub fn has_default(&self) -> bool {
    self.default.is_some()
  }
}

/// The resolved argument list handed to a constructor.
///
/// Arguments keep declaration order; an entry is `None` when an optional
/// parameter fell back to "absent".
pub struct Arguments {
  class: String,
  values: Vec<(String, Option<Value>)>,
}

impl Arguments {
  pub(crate) fn new(class: &str) -> Self {
    Self {
      class: class.to_owned(),
      values: Vec::new(),
    }
  }

  pub(crate) fn push(&mut self, name: &str, value: Option<Value>) {
    self.values.push((name.to_owned(), value));
  }

  /// The class these arguments are being resolved for.
  pub fn class(&self) -> &str {
    &self.class
  }

  /// Returns the argument `name`, which must be present and of type `T`.
  pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
    self
      .optional::<T>(name)?
      .ok_or_else(|| Error::reflection(&self.class, format!("argument {} is absent", name)))
  }

  /// Returns the argument `name` as `T`, or `None` if it defaulted to absent.
  pub fn optional<T: Any + Send + Sync>(&self, name: &str) -> Result<Option<Arc<T>>> {
    let (_, slot) = self
      .values
      .iter()
      .find(|(param, _)| param == name)
      .ok_or_else(|| Error::reflection(&self.class, format!("no argument named {}", name)))?;

    match slot {
      None => Ok(None),
      Some(value) => Arc::clone(value).downcast::<T>().map(Some).map_err(|_| {
        Error::reflection(
          &self.class,
          format!("argument {} is not a {}", name, type_name::<T>()),
        )
      }),
    }
  }

  /// Clones a plain value out of the argument `name`.
  pub fn value<T: Any + Send + Sync + Clone>(&self, name: &str) -> Result<T> {
    self.get::<T>(name).map(|value| (*value).clone())
  }
}

type Constructor = Arc<dyn Fn(&mut Arguments) -> Result<Value> + Send + Sync>;

/// Everything needed to autowire one class: its identifier, constructor
/// parameters, and the constructor itself.
#[derive(Clone)]
pub struct ClassDescriptor {
  id: String,
  params: Vec<ParamDescriptor>,
  constructor: Option<Constructor>,
}

impl ClassDescriptor {
  /// Describes an [`Injectable`] type under its fully-qualified type name.
  pub fn of<T: Injectable>() -> Self {
    Self {
      id: type_name::<T>().to_owned(),
      params: T::dependencies(),
      constructor: Some(Arc::new(|args: &mut Arguments| {
        T::construct(args).map(|instance| Arc::new(instance) as Value)
      })),
    }
  }

  /// Describes a class that exists but must not be constructed by the container.
  pub fn non_instantiable<T: ?Sized + Any>() -> Self {
    Self::non_instantiable_named(type_name::<T>())
  }

  pub fn non_instantiable_named(id: &str) -> Self {
    Self {
      id: id.to_owned(),
      params: Vec::new(),
      constructor: None,
    }
  }

  /// Builds a descriptor by hand for an arbitrary identifier.
  pub fn named<T, F>(id: &str, params: Vec<ParamDescriptor>, constructor: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(&mut Arguments) -> Result<T> + Send + Sync + 'static,
  {
    Self {
      id: id.to_owned(),
      params,
      constructor: Some(Arc::new(move |args: &mut Arguments| {
        constructor(args).map(|instance| Arc::new(instance) as Value)
      })),
    }
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn params(&self) -> &[ParamDescriptor] {
    &self.params
  }

  pub fn is_instantiable(&self) -> bool {
    self.constructor.is_some()
  }

  pub(crate) fn construct(&self, args: &mut Arguments) -> Result<Value> {
    match &self.constructor {
      Some(constructor) => constructor(args),
      None => Err(Error::NotInstantiable(self.id.clone())),
    }
  }
}

impl fmt::Debug for ClassDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClassDescriptor")
      .field("id", &self.id)
      .field("params", &self.params)
      .field("instantiable", &self.is_instantiable())
      .finish()
  }
}

/// A type that can describe and build itself for autowiring.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{Arguments, Injectable, ParamDescriptor, Result};
///
/// struct Greeting {
///   text: String,
/// }
///
/// impl Injectable for Greeting {
///   fn dependencies() -> Vec<ParamDescriptor> {
///     vec![ParamDescriptor::builtin::<String>("text").with_default(|| "hello".to_string())]
///   }
///
///   fn construct(args: &mut Arguments) -> Result<Self> {
///     Ok(Greeting { text: args.value("text")? })
///   }
/// }
/// ```
pub trait Injectable: Any + Send + Sync + Sized {
  /// Constructor parameters in declaration order. Defaults to none.
  fn dependencies() -> Vec<ParamDescriptor> {
    Vec::new()
  }

  fn construct(args: &mut Arguments) -> Result<Self>;
}
