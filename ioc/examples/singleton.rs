use fibre_autowire::{Container, Error};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() -> Result<(), Error> {
  let container = Container::new();

  // This factory will only be called ONCE.
  container.bind("tracker", |_| {
    println!("Creating RequestTracker...");
    Ok(RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    })
  })?;

  println!("--- Resolving ---");
  let s1 = container.get_as::<RequestTracker>("tracker")?;
  let s2 = container.get_as::<RequestTracker>("tracker")?;
  println!("Tracker 1 ID: {}, Tracker 2 ID: {}", s1.id, s2.id);
  assert_eq!(s1.id, 0);
  assert_eq!(s2.id, 0);
  assert!(Arc::ptr_eq(&s1, &s2), "Instances should be identical");
  println!("Instances are the same pointer, as expected.\n");

  println!("--- Rebinding ---");
  match container.bind("tracker", |_| Ok(RequestTracker { id: 99 })) {
    Err(err @ Error::DuplicateBinding(_)) => println!("Rejected: {}", err),
    other => panic!("Expected a duplicate binding error, got {:?}", other.err()),
  }
  Ok(())
}
