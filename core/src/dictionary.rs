use crate::TermId;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Maps terms to dense ids in first-seen order. Ids are never reassigned or removed.
#[derive(Debug, Default)]
pub struct TermDictionary {
    ids: RwLock<HashMap<String, TermId>>,
}

impl TermDictionary {
    pub fn new() -> Self { Self::default() }

    /// Returns the id for `term`, assigning the next sequential id if the term is new.
    pub fn resolve(&self, term: &str) -> TermId {
        if let Some(&id) = self.ids.read().get(term) {
            return id;
        }
        // Re-check under the write lock: another caller may have inserted the term
        // between dropping the read guard and acquiring this one.
        let mut ids = self.ids.write();
        if let Some(&id) = ids.get(term) {
            return id;
        }
        let id = ids.len() as TermId;
        ids.insert(term.to_string(), id);
        id
    }

    /// Pure lookup; never assigns an id.
    pub fn lookup(&self, term: &str) -> Option<TermId> {
        self.ids.read().get(term).copied()
    }

    pub fn len(&self) -> usize { self.ids.read().len() }

    pub fn is_empty(&self) -> bool { self.ids.read().is_empty() }
}
