use super::{EntityKind, Store, StoreError};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};

/// In-process store. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<(EntityKind, String), Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.records
            .read()
            .keys()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.records.read().get(&(kind, id.to_string())).cloned())
    }

    async fn save(&self, kind: EntityKind, id: &str, record: Value) -> Result<(), StoreError> {
        self.records.write().insert((kind, id.to_string()), record);
        Ok(())
    }
}
