//! Session registry
//!
//! Sessions are independent: each holds its own derived view and
//! selection while sharing the one immutable catalogue. The registry is
//! the only synchronized structure in the crate; the catalogue itself is
//! fanned out read-only and never locked.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::catalogue::ClassificationTable;

use super::state::SessionState;

/// Uuid-keyed registry of live sessions
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, SessionState>>,
}

impl SessionManager {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session holding the seeded initial sample.
    pub fn create(&self, table: &ClassificationTable) -> Uuid {
        let id = Uuid::new_v4();
        let state = SessionState::initial(table);
        self.sessions
            .write()
            .expect("session registry lock poisoned")
            .insert(id, state);
        id
    }

    /// Runs a closure against a session's state.
    ///
    /// Returns `None` for unknown session ids.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&SessionState) -> R) -> Option<R> {
        let sessions = self
            .sessions
            .read()
            .expect("session registry lock poisoned");
        sessions.get(&id).map(f)
    }

    /// Runs a mutating closure against a session's state.
    pub fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        let mut sessions = self
            .sessions
            .write()
            .expect("session registry lock poisoned");
        sessions.get_mut(&id).map(f)
    }

    /// Drops a session; returns whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions
            .write()
            .expect("session registry lock poisoned")
            .remove(&id)
            .is_some()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .expect("session registry lock poisoned")
            .len()
    }

    /// True when no sessions exist
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{SourceClass, SourceRecord};

    fn table() -> ClassificationTable {
        let rows = (0..10)
            .map(|i| SourceRecord {
                name: format!("src-{i}"),
                ra: 10.0 * i as f64,
                dec: 0.0,
                class1: SourceClass::Star,
                cmp1: 0.9,
                class2: SourceClass::Agn,
                cmp2: 0.05,
                has_explanation: false,
            })
            .collect();
        ClassificationTable::from_rows(rows).unwrap()
    }

    #[test]
    fn test_create_and_lookup() {
        let manager = SessionManager::new();
        let table = table();
        let id = manager.create(&table);
        assert_eq!(manager.len(), 1);

        let view_len = manager.with_session(id, |s| s.view().len()).unwrap();
        assert_eq!(view_len, 10);
    }

    #[test]
    fn test_unknown_session() {
        let manager = SessionManager::new();
        assert!(manager.with_session(Uuid::new_v4(), |_| ()).is_none());
        assert!(!manager.remove(Uuid::new_v4()));
    }

    #[test]
    fn test_sessions_are_independent() {
        let manager = SessionManager::new();
        let table = table();
        let a = manager.create(&table);
        let b = manager.create(&table);

        manager.update(a, |s| s.submit_filter(vec![])).unwrap();
        assert_eq!(manager.with_session(a, |s| s.view().len()).unwrap(), 0);
        assert_eq!(manager.with_session(b, |s| s.view().len()).unwrap(), 10);
    }

    #[test]
    fn test_remove() {
        let manager = SessionManager::new();
        let id = manager.create(&table());
        assert!(manager.remove(id));
        assert!(manager.is_empty());
    }
}
