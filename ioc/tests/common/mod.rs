//! Fixture classes shared by the integration tests.
#![allow(dead_code)]

use fibre_autowire::{Arguments, ClassDescriptor, ClassRegistry, Injectable, ParamDescriptor, Result};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Foo;

impl Injectable for Foo {
  fn construct(_args: &mut Arguments) -> Result<Self> {
    Ok(Foo)
  }
}

#[derive(Debug)]
pub struct FooWithDependency {
  pub foo: Arc<Foo>,
}

impl Injectable for FooWithDependency {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::service::<Foo>("foo")]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(FooWithDependency { foo: args.get("foo")? })
  }
}

#[derive(Debug)]
pub struct FooWithDeeplyNestedDependency {
  pub inner: Arc<FooWithDependency>,
}

impl Injectable for FooWithDeeplyNestedDependency {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::service::<FooWithDependency>("inner")]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(FooWithDeeplyNestedDependency {
      inner: args.get("inner")?,
    })
  }
}

pub struct ClassWithDefaultParameters {
  param: String,
}

impl ClassWithDefaultParameters {
  pub fn param(&self) -> &str {
    &self.param
  }
}

impl Injectable for ClassWithDefaultParameters {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::builtin::<String>("param").with_default(|| "default".to_string())]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(ClassWithDefaultParameters {
      param: args.value("param")?,
    })
  }
}

pub struct ClassWithOptionalDependency {
  foo: Option<Arc<Foo>>,
}

impl ClassWithOptionalDependency {
  pub fn foo(&self) -> Option<&Arc<Foo>> {
    self.foo.as_ref()
  }
}

impl Injectable for ClassWithOptionalDependency {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::service::<Foo>("foo").optional()]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(ClassWithOptionalDependency {
      foo: args.optional("foo")?,
    })
  }
}

/// Has a primitive parameter with no default.
#[derive(Debug)]
pub struct ClassWithRequiredScalar {
  pub port: u16,
}

impl Injectable for ClassWithRequiredScalar {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::builtin::<u16>("port")]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(ClassWithRequiredScalar {
      port: args.value("port")?,
    })
  }
}

/// Only ever built through its own `make`, never by the container.
pub struct NonInstantiableClass {
  _private: (),
}

impl NonInstantiableClass {
  pub fn make() -> Self {
    NonInstantiableClass { _private: () }
  }
}

#[derive(Debug)]
pub struct CircularDependencyA {
  pub b: Arc<CircularDependencyB>,
}

#[derive(Debug)]
pub struct CircularDependencyB {
  pub a: Arc<CircularDependencyA>,
}

impl Injectable for CircularDependencyA {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::service::<CircularDependencyB>("b")]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(CircularDependencyA { b: args.get("b")? })
  }
}

impl Injectable for CircularDependencyB {
  fn dependencies() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor::service::<CircularDependencyA>("a")]
  }

  fn construct(args: &mut Arguments) -> Result<Self> {
    Ok(CircularDependencyB { a: args.get("a")? })
  }
}

/// A registry holding every fixture class.
pub fn fixture_classes() -> ClassRegistry {
  let mut classes = ClassRegistry::new();
  classes
    .register::<Foo>()
    .register::<FooWithDependency>()
    .register::<FooWithDeeplyNestedDependency>()
    .register::<ClassWithDefaultParameters>()
    .register::<ClassWithOptionalDependency>()
    .register::<ClassWithRequiredScalar>()
    .register::<CircularDependencyA>()
    .register::<CircularDependencyB>()
    .register_descriptor(ClassDescriptor::non_instantiable::<NonInstantiableClass>());
  classes
}

pub fn id_of<T: ?Sized>() -> &'static str {
  std::any::type_name::<T>()
}
