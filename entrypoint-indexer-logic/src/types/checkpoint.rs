use crate::store::{Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// Last block range fully processed for a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: String,
    pub block_number: u64,
}

impl Entity for Checkpoint {
    const KIND: EntityKind = EntityKind::Checkpoint;

    fn id(&self) -> &str {
        &self.id
    }
}
