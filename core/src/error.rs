use std::io;
use thiserror::Error;

/// Failure while indexing one collection. The collection is skipped; others are unaffected.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("cannot enumerate collection {collection}: {source}")]
    Enumerate {
        collection: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read entry {entry} of collection {collection}: {source}")]
    Read {
        collection: String,
        entry: String,
        #[source]
        source: io::Error,
    },
}

impl IndexError {
    pub fn collection(&self) -> &str {
        match self {
            IndexError::Enumerate { collection, .. } | IndexError::Read { collection, .. } => collection,
        }
    }
}
