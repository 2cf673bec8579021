//! # Fibre Autowire
//!
//! A string-keyed Inversion of Control (IoC) container for Rust with
//! constructor autowiring and singleton resolution.
//!
//! ## Core Concepts
//!
//! - **Container**: The registry for all entries. Identifiers are plain strings;
//!   arbitrary names (`"latency"`) and fully-qualified type names share one
//!   namespace.
//! - **Binding**: A factory registered under an identifier with `bind`. The
//!   factory receives the container and may resolve other entries.
//! - **Autowiring**: Identifiers without a binding are looked up in a
//!   [`ClassRegistry`]. Registered classes describe their constructor
//!   parameters; the container resolves each one, falling back to declared
//!   defaults for primitive or optional parameters.
//! - **Singletons**: Every resolution is cached. Resolving an identifier twice
//!   yields the same `Arc`.
//! - **Cycle detection**: Re-entering an identifier that is still being
//!   resolved fails with [`Error::CircularDependency`].
//!
//! ## Quick Start
//!
//! ```
//! use fibre_autowire::{Arguments, ClassRegistry, Container, Injectable, ParamDescriptor, Result};
//! use std::sync::Arc;
//!
//! struct Database {
//!   url: String,
//! }
//!
//! impl Injectable for Database {
//!   fn dependencies() -> Vec<ParamDescriptor> {
//!     vec![ParamDescriptor::builtin::<String>("url").with_default(|| "sqlite::memory:".to_string())]
//!   }
//!
//!   fn construct(args: &mut Arguments) -> Result<Self> {
//!     Ok(Database { url: args.value("url")? })
//!   }
//! }
//!
//! struct UserService {
//!   db: Arc<Database>,
//! }
//!
//! impl Injectable for UserService {
//!   fn dependencies() -> Vec<ParamDescriptor> {
//!     vec![ParamDescriptor::service::<Database>("db")]
//!   }
//!
//!   fn construct(args: &mut Arguments) -> Result<Self> {
//!     Ok(UserService { db: args.get("db")? })
//!   }
//! }
//!
//! let mut classes = ClassRegistry::new();
//! classes.register::<Database>().register::<UserService>();
//!
//! let container = Container::new().with_introspector(classes);
//! container.bind("latency", |_| Ok(123_u32)).unwrap();
//!
//! let users = container.resolve::<UserService>().unwrap();
//! assert_eq!(users.db.url, "sqlite::memory:");
//! assert!(Arc::ptr_eq(&users.db, &container.resolve::<Database>().unwrap()));
//! assert_eq!(*container.get_as::<u32>("latency").unwrap(), 123);
//! ```

mod config;
mod container;
mod core;
mod descriptor;
mod error;
mod factory;
mod introspect;
mod macros;

pub use crate::core::{Definition, Value};
pub use config::{BindingPolicy, ContainerConfig};
pub use container::Container;
pub use descriptor::{
  Arguments, ClassDescriptor, DefaultValue, Injectable, ParamDescriptor, ParamKind,
};
pub use error::{BoxError, ConfigError, Error, Result};
pub use factory::{definition, ContainerFactory};
pub use introspect::{ClassRegistry, TypeIntrospector};
