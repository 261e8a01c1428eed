mod error;
pub mod indexer;
pub mod repository;
pub mod store;
#[cfg(test)]
pub mod test_utils;
pub mod types;

pub use error::IndexerError;
pub use indexer::{
    EntryPointIndexer,
    feed::{ChainClient, LogBatch, LogFeed},
    settings::IndexerSettings,
};
pub use store::{DatabaseStore, EntityKind, MemoryStore, Store, StoreError};
