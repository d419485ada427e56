pub mod dictionary;
pub mod engine;
pub mod error;
pub mod indexer;
pub mod normalize;
pub mod source;
pub mod store;
pub mod tokenizer;

pub use dictionary::TermDictionary;
pub use engine::{EngineConfig, QueryResolution, ScoredResult, SearchEngine, SearchHit};
pub use error::IndexError;
pub use indexer::{CollectionSummary, IndexReport, Indexer};
pub use normalize::{normalize, Orientation, SCORE_EPSILON};
pub use source::{page_url, Collection, DirectoryCollection, MemoryCollection, DEFAULT_SITE_ROOT};
pub use store::{DocHandle, Document, DocumentStore};

pub type TermId = u32;
