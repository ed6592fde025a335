//! In-memory navigation history.
//!
//! Models the parts of browser history the selection layer depends on: a
//! stack of locations with a cursor, `push`/`replace` that never notify, and
//! `back`/`forward` that notify listeners (pop-state semantics).

use crate::subscription::{ListenerSet, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A path plus ordered query parameters, e.g. `/companies?company=c-42`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Parse `path?key=value&...`. Fragments are dropped and malformed
    /// percent-escapes are kept verbatim.
    pub fn parse(input: &str) -> Self {
        let input = input.split('#').next().unwrap_or_default();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, query),
            None => (input, ""),
        };
        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value of `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Same location with `key` set to `value`, replacing any previous values.
    pub fn with_param(&self, key: &str, value: &str) -> Self {
        let mut next = self.without_param(key);
        next.query.push((key.to_string(), value.to_string()));
        next
    }

    /// Same location minus every occurrence of `key`; other parameters keep
    /// their order.
    pub fn without_param(&self, key: &str) -> Self {
        Self {
            path: self.path.clone(),
            query: self
                .query
                .iter()
                .filter(|(k, _)| k != key)
                .cloned()
                .collect(),
        }
    }
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (index, (key, value)) in self.query.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                separator,
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

struct HistoryState {
    entries: Vec<Location>,
    cursor: usize,
}

/// Shared handle to one navigation history. Clones refer to the same stack.
#[derive(Clone)]
pub struct History {
    state: Rc<RefCell<HistoryState>>,
    listeners: Rc<ListenerSet<Location>>,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            state: Rc::new(RefCell::new(HistoryState {
                entries: vec![initial],
                cursor: 0,
            })),
            listeners: Rc::new(ListenerSet::new()),
        }
    }

    pub fn current(&self) -> Location {
        let state = self.state.borrow();
        state.entries[state.cursor].clone()
    }

    /// Add an entry after the current one, discarding any forward entries.
    pub fn push(&self, location: Location) {
        let mut state = self.state.borrow_mut();
        let keep = state.cursor + 1;
        state.entries.truncate(keep);
        state.entries.push(location);
        state.cursor = keep;
    }

    /// Overwrite the current entry.
    pub fn replace(&self, location: Location) {
        let mut state = self.state.borrow_mut();
        let cursor = state.cursor;
        state.entries[cursor] = location;
    }

    /// Step back one entry and notify listeners. No-op at the first entry.
    pub fn back(&self) -> bool {
        self.step(-1)
    }

    /// Step forward one entry and notify listeners. No-op at the last entry.
    pub fn forward(&self) -> bool {
        self.step(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.state.borrow().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let state = self.state.borrow();
        state.cursor + 1 < state.entries.len()
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().entries.is_empty()
    }

    /// Register a navigation listener, called after every back/forward with
    /// the new current location.
    pub fn listen(&self, listener: impl Fn(&Location) + 'static) -> Subscription {
        self.listeners.add(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn step(&self, delta: isize) -> bool {
        let location = {
            let mut state = self.state.borrow_mut();
            let Some(target) = state.cursor.checked_add_signed(delta) else {
                return false;
            };
            if target >= state.entries.len() {
                return false;
            }
            state.cursor = target;
            state.entries[target].clone()
        };
        self.listeners.notify(&location);
        true
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("History")
            .field("entries", &state.entries.len())
            .field("cursor", &state.cursor)
            .field("current", &state.entries[state.cursor].to_string())
            .finish()
    }
}
