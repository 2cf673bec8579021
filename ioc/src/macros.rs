//! Public macros for ergonomic container bootstrap and resolution.

/// Builds an ordered definition list for
/// [`ContainerFactory::from_definitions`](crate::ContainerFactory::from_definitions).
///
/// Each entry is `id => factory`, where the factory is any closure accepted
/// by [`definition`](crate::definition). Entries keep the order they are
/// written in.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{definitions, ContainerFactory};
///
/// let defs = definitions! {
///   "some_scalar" => |_| Ok(123_i64),
///   "some_string" => |_| Ok(String::from("hello")),
/// };
/// assert_eq!(defs.len(), 2);
/// assert_eq!(defs[0].0, "some_scalar");
///
/// let container = ContainerFactory::from_definitions(defs).unwrap();
/// assert!(container.has("some_string"));
/// ```
#[macro_export]
macro_rules! definitions {
    ($($id:expr => $factory:expr),* $(,)?) => {
        ::std::vec![
            $((::std::string::String::from($id), $crate::definition($factory))),*
        ]
    };
}

/// Resolves a typed entry from a container, panicking if it cannot be resolved.
///
/// For a non-panicking version, use `Container::get_as` or
/// `Container::resolve` directly.
///
/// # Panics
///
/// Panics with the resolution error's message.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{resolve, Container};
///
/// let container = Container::new();
/// container.bind("greeting", |_| Ok(String::from("hello"))).unwrap();
///
/// let greeting = resolve!(container, String, "greeting");
/// assert_eq!(*greeting, "hello");
/// ```
#[macro_export]
macro_rules! resolve {
    // Arm for resolving a type under its type name: resolve!(container, MyService)
    ($container:expr, $type:ty) => {
        $container.resolve::<$type>().unwrap_or_else(|err| {
            panic!(
                "Failed to resolve required service {}: {}",
                ::std::any::type_name::<$type>(),
                err
            )
        })
    };

    // Arm for resolving a named entry: resolve!(container, MyService, "name")
    ($container:expr, $type:ty, $id:expr) => {
        $container.get_as::<$type>($id).unwrap_or_else(|err| {
            panic!(
                "Failed to resolve required service with id '{}': {}",
                $id,
                err
            )
        })
    };
}
