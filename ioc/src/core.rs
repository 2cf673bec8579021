//! Core, non-public data structures for the IoC container.

use crate::error::{Error, Result};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A resolved entry. Every value handed out by the container is shared.
pub type Value = Arc<dyn Any + Send + Sync>;

/// A type-erased factory, as stored in the binding map.
pub type Definition = Arc<dyn Fn(&crate::Container) -> Result<Value> + Send + Sync>;

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_container_id() -> u64 {
  NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed)
}

thread_local! {
  // Identifiers currently being resolved on this thread, tagged with the
  // owning container so that two containers never see each other's frames.
  static RESOLVING_STACK: RefCell<HashSet<FrameKey>> = RefCell::new(HashSet::new());
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct FrameKey {
  container: u64,
  id: String,
}

/// An RAII guard marking an identifier as "in resolution".
///
/// Entering fails if the identifier is already on this thread's resolution
/// frame for the same container. Dropping the guard removes the marker, on
/// the success path and on every error path alike.
pub(crate) struct ResolutionGuard {
  key: FrameKey,
}

impl ResolutionGuard {
  pub(crate) fn enter(container: u64, id: &str) -> Result<Self> {
    let key = FrameKey {
      container,
      id: id.to_owned(),
    };
    RESOLVING_STACK.with(|stack| {
      // `insert` returns `false` if the value was already present.
      if stack.borrow_mut().insert(key.clone()) {
        Ok(Self { key })
      } else {
        Err(Error::CircularDependency(id.to_owned()))
      }
    })
  }

  #[cfg(test)]
  pub(crate) fn is_active(container: u64, id: &str) -> bool {
    let key = FrameKey {
      container,
      id: id.to_owned(),
    };
    RESOLVING_STACK.with(|stack| stack.borrow().contains(&key))
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      stack.borrow_mut().remove(&self.key);
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reentering_the_same_frame_fails() {
    let _outer = ResolutionGuard::enter(7, "a").unwrap();
    let err = ResolutionGuard::enter(7, "a").err().unwrap();
    assert!(matches!(err, Error::CircularDependency(id) if id == "a"));
  }

  #[test]
  fn frames_are_scoped_per_container() {
    let _a = ResolutionGuard::enter(1, "shared").unwrap();
    assert!(ResolutionGuard::enter(2, "shared").is_ok());
  }

  #[test]
  fn dropping_the_guard_releases_the_marker() {
    {
      let _guard = ResolutionGuard::enter(3, "b").unwrap();
      assert!(ResolutionGuard::is_active(3, "b"));
    }
    assert!(!ResolutionGuard::is_active(3, "b"));
    assert!(ResolutionGuard::enter(3, "b").is_ok());
  }
}
