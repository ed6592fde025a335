//! Scoped callback registrations.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); the UI runs one
//! cooperative event loop and nothing is shared across threads.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A registered callback. Dropping it deregisters the callback.
#[must_use = "dropping a Subscription immediately deregisters its callback"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to deregister.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Deregister now. Same as dropping.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type Callback<A> = Rc<dyn Fn(&A)>;

struct Registry<A> {
    next_id: u64,
    callbacks: Vec<(u64, Callback<A>)>,
}

/// Set of listeners notified with a borrowed `A`.
pub(crate) struct ListenerSet<A> {
    inner: Rc<RefCell<Registry<A>>>,
}

impl<A: 'static> ListenerSet<A> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                callbacks: Vec::new(),
            })),
        }
    }

    pub(crate) fn add(&self, callback: impl Fn(&A) + 'static) -> Subscription {
        let id = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.callbacks.push((id, Rc::new(callback)));
            id
        };
        let registry = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .callbacks
                    .retain(|(existing, _)| *existing != id);
            }
        })
    }

    /// Call every listener. Listeners may subscribe, unsubscribe or read the
    /// notifying object while being called.
    pub(crate) fn notify(&self, value: &A) {
        let callbacks: Vec<Callback<A>> = self
            .inner
            .borrow()
            .callbacks
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }
}
