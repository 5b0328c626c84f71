// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::{Cell, RefCell};

/// A two-way handle to a host-owned text value.
///
/// Cloning the binding shares the value: the host keeps one clone and hands another to the
/// view. Every write bumps a revision counter so readers can tell when the value changed
/// under them.
///
/// Bindings are confined to the UI thread.
#[derive(Clone, Debug, Default)]
pub struct TextBinding {
    inner: Rc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    text: RefCell<String>,
    revision: Cell<u64>,
}

impl TextBinding {
    /// Creates a binding holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                text: RefCell::new(text.into()),
                revision: Cell::new(0),
            }),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> String {
        self.inner.text.borrow().clone()
    }

    /// Runs `f` with the current value borrowed.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self.inner.text.borrow())
    }

    /// Returns `true` if the current value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.inner.text.borrow().is_empty()
    }

    /// Replaces the value.
    ///
    /// Writing a value equal to the current one is a no-op and does not bump the revision.
    pub fn set(&self, text: impl Into<String>) {
        let text = text.into();
        let mut current = self.inner.text.borrow_mut();
        if *current != text {
            *current = text;
            self.inner.revision.set(self.inner.revision.get().wrapping_add(1));
        }
    }

    /// Monotonic counter of writes that changed the value.
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Returns `true` if both handles share the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::TextBinding;

    #[test]
    fn clones_share_the_value() {
        let host = TextBinding::new("hi");
        let view = host.clone();
        assert!(host.ptr_eq(&view));
        view.set("hello");
        assert_eq!(host.get(), "hello");
        assert_eq!(host.revision(), 1);
    }

    #[test]
    fn unchanged_writes_keep_the_revision() {
        let binding = TextBinding::new("same");
        binding.set("same");
        assert_eq!(binding.revision(), 0);
        binding.set("");
        assert!(binding.is_empty());
        assert_eq!(binding.revision(), 1);
        assert_eq!(binding.with(str::len), 0);
    }
}
