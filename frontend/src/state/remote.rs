//! Load state for sections that read from the store.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    /// Nothing usable came back; `failed` is set when the read errored
    /// rather than returned empty.
    Fallback { failed: bool },
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

impl<T> Remote<T> {
    pub fn from_optional<E>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(value)) => Remote::Ready(value),
            Ok(None) => Remote::Fallback { failed: false },
            Err(_) => Remote::Fallback { failed: true },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn failed(&self) -> bool {
        matches!(self, Remote::Fallback { failed: true })
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Remote<Vec<T>> {
    /// An empty list is a fallback, never an empty carousel.
    pub fn from_list<E>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Remote::Fallback { failed: false },
            Ok(items) => Remote::Ready(items),
            Err(_) => Remote::Fallback { failed: true },
        }
    }
}

/// Flag shared between an effect and the future it spawned. The effect's
/// destructor releases it; the future checks it before touching state.
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
