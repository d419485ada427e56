use crate::indexer::{IndexReport, Indexer};
use crate::normalize::{normalize, Orientation};
use crate::source::{Collection, DEFAULT_SITE_ROOT};
use crate::store::{DocHandle, Document, DocumentStore};
use crate::{TermDictionary, TermId};
use serde::Serialize;
use std::cmp::Ordering;

/// How a query term is mapped to a term id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryResolution {
    /// Unseen query terms are added to the dictionary, as indexing does.
    #[default]
    Create,
    /// Unseen query terms score zero everywhere and leave the dictionary untouched.
    LookupOnly,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Root used to build each document's canonical link.
    pub site_root: String,
    pub query_resolution: QueryResolution,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { site_root: DEFAULT_SITE_ROOT.to_string(), query_resolution: QueryResolution::default() }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredResult<'a> {
    pub handle: DocHandle,
    pub document: &'a Document,
    /// Normalized score in `(0, 1]`.
    pub score: f64,
}

/// Flattened result handed to transports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub document_name: String,
    pub document_url: String,
    pub normalized_score: f64,
}

impl From<&ScoredResult<'_>> for SearchHit {
    fn from(r: &ScoredResult<'_>) -> Self {
        Self { document_name: r.document.name.clone(), document_url: r.document.url.clone(), normalized_score: r.score }
    }
}

/// Single-term retrieval engine. Build it, index once, then share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    dictionary: TermDictionary,
    store: DocumentStore,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, dictionary: TermDictionary::new(), store: DocumentStore::new() }
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn dictionary(&self) -> &TermDictionary { &self.dictionary }

    pub fn documents(&self) -> &DocumentStore { &self.store }

    pub fn index<C: Collection>(&mut self, collections: &[C]) -> IndexReport {
        Indexer::new(&self.dictionary, &mut self.store, &self.config.site_root).index(collections)
    }

    /// Rank every document containing `term` by normalized term frequency.
    ///
    /// Results are ordered by descending score; documents with equal scores keep
    /// their store order. Documents without an occurrence are never returned.
    pub fn search(&self, term: &str) -> Vec<ScoredResult<'_>> {
        let term_id = self.resolve_query(term);

        let mut scores: Vec<f64> = self
            .store
            .iter()
            .map(|(_, doc)| term_id.map_or(0, |id| doc.term_frequency(id)) as f64)
            .collect();
        normalize(&mut scores, Orientation::HigherIsBetter);

        let mut results: Vec<ScoredResult<'_>> = self
            .store
            .iter()
            .zip(scores)
            .filter(|(_, score)| *score > 0.0)
            .map(|((handle, document), score)| ScoredResult { handle, document, score })
            .collect();
        // sort_by is stable, so ties stay in store order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        tracing::debug!(term, ?term_id, hits = results.len(), "search");
        results
    }

    /// [`search`](Self::search) flattened into owned hits.
    pub fn search_hits(&self, term: &str) -> Vec<SearchHit> {
        self.search(term).iter().map(SearchHit::from).collect()
    }

    fn resolve_query(&self, term: &str) -> Option<TermId> {
        match self.config.query_resolution {
            QueryResolution::Create => Some(self.dictionary.resolve(term)),
            QueryResolution::LookupOnly => self.dictionary.lookup(term),
        }
    }
}
