use crate::error::IndexError;
use crate::source::{page_url, Collection};
use crate::store::{Document, DocumentStore};
use crate::tokenizer::split_terms;
use crate::TermDictionary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub collection: String,
    pub documents: usize,
}

#[derive(Debug, Default)]
pub struct IndexReport {
    pub indexed: Vec<CollectionSummary>,
    pub failures: Vec<IndexError>,
}

impl IndexReport {
    /// Documents added across all successfully indexed collections.
    pub fn documents(&self) -> usize {
        self.indexed.iter().map(|s| s.documents).sum()
    }

    pub fn is_complete(&self) -> bool { self.failures.is_empty() }
}

/// Tokenizes collection entries and appends them to a document store.
pub struct Indexer<'a> {
    dictionary: &'a TermDictionary,
    store: &'a mut DocumentStore,
    site_root: &'a str,
}

impl<'a> Indexer<'a> {
    pub fn new(dictionary: &'a TermDictionary, store: &'a mut DocumentStore, site_root: &'a str) -> Self {
        Self { dictionary, store, site_root }
    }

    /// Index collections one after another. A failing collection contributes no
    /// documents and is reported; the remaining collections are still indexed.
    pub fn index<C: Collection>(&mut self, collections: &[C]) -> IndexReport {
        let mut report = IndexReport::default();
        for collection in collections {
            match self.index_collection(collection) {
                Ok(summary) => {
                    tracing::info!(
                        collection = %summary.collection,
                        documents = summary.documents,
                        num_terms = self.dictionary.len(),
                        "indexed collection"
                    );
                    report.indexed.push(summary);
                }
                Err(err) => {
                    tracing::error!(collection = %err.collection(), error = %err, "collection skipped");
                    report.failures.push(err);
                }
            }
        }
        report
    }

    fn index_collection<C: Collection>(&mut self, collection: &C) -> Result<CollectionSummary, IndexError> {
        let name = collection.name();
        let entries = collection
            .entries()
            .map_err(|source| IndexError::Enumerate { collection: name.to_string(), source })?;

        // Documents are only committed once the whole collection has been read.
        let mut staged = Vec::with_capacity(entries.len());
        for entry in entries {
            let text = collection.read(&entry).map_err(|source| IndexError::Read {
                collection: name.to_string(),
                entry: entry.clone(),
                source,
            })?;
            let terms = split_terms(&text).map(|t| self.dictionary.resolve(t)).collect();
            let url = page_url(self.site_root, &entry);
            staged.push(Document::new(entry, url, terms));
        }

        let documents = staged.len();
        for doc in staged {
            self.store.push(doc);
        }
        Ok(CollectionSummary { collection: name.to_string(), documents })
    }
}
