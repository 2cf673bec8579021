use fibre_autowire::{resolve, Container, Error};
use std::panic;

struct UnregisteredService;

fn main() {
  let container = Container::new();

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _service = resolve!(container, UnregisteredService);
  }));

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible `get()` method ---
  println!("\nNow, attempting to resolve \"Bar\" using `get()`...");

  match container.get("Bar") {
    Ok(_) => panic!("Should not have found the entry!"),
    Err(err @ Error::NotFound(_)) => println!("Correctly received: {}", err),
    Err(other) => panic!("Unexpected error: {}", other),
  }
}
