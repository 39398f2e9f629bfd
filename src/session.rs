//! In-memory session store — proceeding text keyed by session id.
//!
//! One entry per session id: a later [`save`](SessionStore::save) overwrites
//! silently (no versioning, no append). Entries live for the lifetime of the
//! process; there is no eviction, size bound, or TTL, so memory grows with
//! distinct session ids. That gap is deliberate for now — a bounded or
//! persistent store can be swapped in behind the same three operations.
//!
//! The store is constructed once at startup and shared as `Arc<SessionStore>`
//! rather than living in a global. All three operations are synchronous and
//! non-blocking: critical sections only touch the map, never I/O.

use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct SessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `text` with `session_id`, replacing any prior association.
    /// Always succeeds; concurrent saves to the same id are last-writer-wins.
    pub fn save(&self, session_id: &str, text: &str) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(session_id.to_string(), text.to_string());
    }

    /// Return the text associated with `session_id`, or `None`.
    pub fn get(&self, session_id: &str) -> Option<String> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.get(session_id).cloned()
    }

    /// Whether an association exists for `session_id`.
    ///
    /// Equivalent to `get(id).is_some()` without cloning the text.
    pub fn exists(&self, session_id: &str) -> bool {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.contains_key(session_id)
    }
}
