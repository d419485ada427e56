use crate::TermId;
use serde::Serialize;

/// Position of a document in its [`DocumentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DocHandle(pub u32);

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub name: String,
    pub url: String,
    /// Term ids in original token order, duplicates included.
    pub terms: Vec<TermId>,
}

impl Document {
    pub fn new(name: impl Into<String>, url: impl Into<String>, terms: Vec<TermId>) -> Self {
        Self { name: name.into(), url: url.into(), terms }
    }

    /// Number of occurrences of `term` in this document.
    pub fn term_frequency(&self, term: TermId) -> u32 {
        self.terms.iter().filter(|&&t| t == term).count() as u32
    }
}

/// Append-only arena of indexed documents, iterated in insertion order.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, doc: Document) -> DocHandle {
        let handle = DocHandle(self.docs.len() as u32);
        self.docs.push(doc);
        handle
    }

    pub fn get(&self, handle: DocHandle) -> Option<&Document> {
        self.docs.get(handle.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocHandle, &Document)> + '_ {
        self.docs.iter().enumerate().map(|(i, d)| (DocHandle(i as u32), d))
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}
