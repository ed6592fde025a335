//! Selection controller and its stores.
//!
//! A page's "which record is open" state lives behind [`SelectionStore`]. The
//! URL-backed store keeps it in a query parameter of a [`History`]; the memory
//! store keeps it in a cell; the controlled store forwards to a parent. The
//! controller only ever talks to the trait.

use crate::field::Entity;
use crate::history::{History, Location};
use crate::subscription::{ListenerSet, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback receiving the store's new selected id.
pub type ChangeCallback = Box<dyn Fn(Option<&str>)>;

/// External owner of one selected id.
pub trait SelectionStore {
    fn get(&self) -> Option<String>;

    fn set(&self, id: &str);

    /// Remove the selection. Calling it with nothing selected is a no-op.
    fn clear(&self);

    /// Called when the selection changes from outside the caller, e.g. on
    /// back/forward navigation.
    fn on_change(&self, callback: ChangeCallback) -> Subscription;
}

// ============================================================================
// URL STORE
// ============================================================================

/// Selection encoded as one query parameter on the current location.
pub struct UrlSelectionStore {
    history: History,
    param: String,
}

impl UrlSelectionStore {
    pub fn new(history: History, param: impl Into<String>) -> Self {
        Self {
            history,
            param: param.into(),
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    fn read(location: &Location, param: &str) -> Option<String> {
        location
            .param(param)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }
}

impl SelectionStore for UrlSelectionStore {
    fn get(&self) -> Option<String> {
        Self::read(&self.history.current(), &self.param)
    }

    /// Pushes a new entry so back navigation restores the previous selection.
    fn set(&self, id: &str) {
        let current = self.history.current();
        if current.param(&self.param) == Some(id) {
            return;
        }
        self.history.push(current.with_param(&self.param, id));
    }

    /// Pushes the current location minus the selection parameter.
    fn clear(&self) {
        let current = self.history.current();
        if current.param(&self.param).is_none() {
            return;
        }
        self.history.push(current.without_param(&self.param));
    }

    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        let param = self.param.clone();
        self.history.listen(move |location| {
            let id = Self::read(location, &param);
            callback(id.as_deref());
        })
    }
}

impl fmt::Debug for UrlSelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSelectionStore")
            .field("param", &self.param)
            .field("selected", &self.get())
            .finish()
    }
}

// ============================================================================
// MEMORY STORE
// ============================================================================

/// Selection held in memory. Every change notifies listeners.
pub struct MemorySelectionStore {
    value: RefCell<Option<String>>,
    listeners: ListenerSet<Option<String>>,
}

impl MemorySelectionStore {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            value: RefCell::new(initial),
            listeners: ListenerSet::new(),
        }
    }

    fn replace(&self, next: Option<String>) {
        {
            let mut value = self.value.borrow_mut();
            if *value == next {
                return;
            }
            *value = next.clone();
        }
        self.listeners.notify(&next);
    }
}

impl Default for MemorySelectionStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SelectionStore for MemorySelectionStore {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, id: &str) {
        self.replace(Some(id.to_string()));
    }

    fn clear(&self) {
        self.replace(None);
    }

    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        self.listeners.add(move |value: &Option<String>| callback(value.as_deref()))
    }
}

impl fmt::Debug for MemorySelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySelectionStore")
            .field("selected", &self.get())
            .finish()
    }
}

// ============================================================================
// CONTROLLED STORE
// ============================================================================

/// Parent-owned selection. `set`/`clear` only forward to the parent's
/// callbacks; the value changes when the parent calls [`update`].
///
/// [`update`]: ControlledSelection::update
pub struct ControlledSelection {
    value: RefCell<Option<String>>,
    on_select: Box<dyn Fn(&str)>,
    on_close: Box<dyn Fn()>,
    listeners: ListenerSet<Option<String>>,
}

impl ControlledSelection {
    pub fn new(
        value: Option<String>,
        on_select: impl Fn(&str) + 'static,
        on_close: impl Fn() + 'static,
    ) -> Self {
        Self {
            value: RefCell::new(value),
            on_select: Box::new(on_select),
            on_close: Box::new(on_close),
            listeners: ListenerSet::new(),
        }
    }

    /// New value from the parent.
    pub fn update(&self, value: Option<String>) {
        {
            let mut current = self.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value.clone();
        }
        self.listeners.notify(&value);
    }
}

impl SelectionStore for ControlledSelection {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, id: &str) {
        (self.on_select)(id);
    }

    fn clear(&self) {
        if self.value.borrow().is_some() {
            (self.on_close)();
        }
    }

    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        self.listeners.add(move |value: &Option<String>| callback(value.as_deref()))
    }
}

impl fmt::Debug for ControlledSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledSelection")
            .field("selected", &self.get())
            .finish()
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// One page's selection. Mirrors the store and stays subscribed to it for as
/// long as the controller lives.
pub struct SelectionController {
    name: &'static str,
    store: Rc<dyn SelectionStore>,
    current: Rc<RefCell<Option<String>>>,
    _subscription: Subscription,
}

impl SelectionController {
    pub fn new(name: &'static str, store: Rc<dyn SelectionStore>) -> Self {
        let current = Rc::new(RefCell::new(store.get()));
        let mirror = Rc::clone(&current);
        let subscription = store.on_change(Box::new(move |id| {
            tracing::debug!(page = name, selected = ?id, "selection resynced");
            *mirror.borrow_mut() = id.map(str::to_string);
        }));
        Self {
            name,
            store,
            current,
            _subscription: subscription,
        }
    }

    /// Controller over a fresh in-memory store.
    pub fn in_memory(name: &'static str) -> Self {
        Self::new(name, Rc::new(MemorySelectionStore::default()))
    }

    pub fn selected(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current.borrow().as_deref() == Some(id)
    }

    pub fn select(&self, id: &str) {
        self.store.set(id);
        self.resync();
        tracing::debug!(page = self.name, id, "selection set");
    }

    /// Close the detail surface. Idempotent.
    pub fn close(&self) {
        if self.current.borrow().is_none() && self.store.get().is_none() {
            return;
        }
        self.store.clear();
        self.resync();
        tracing::debug!(page = self.name, "selection cleared");
    }

    /// The selected record, looked up in `source`. Pass the full source
    /// collection, never a filtered or paginated slice. An id with no match
    /// resolves to `None`.
    pub fn resolve<'a, E: Entity>(&self, source: &'a [E]) -> Option<&'a E> {
        let current = self.current.borrow();
        let id = current.as_deref()?;
        source.iter().find(|record| record.id() == id)
    }

    /// Re-read the store. Needed after navigation the store does not
    /// announce, such as a push to another page's route.
    pub fn resync(&self) {
        let value = self.store.get();
        *self.current.borrow_mut() = value;
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("name", &self.name)
            .field("selected", &self.selected())
            .finish()
    }
}
