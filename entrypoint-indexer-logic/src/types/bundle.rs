use crate::{
    store::{Entity, EntityKind},
    types::{common::hex_id, event::EventContext},
};
use alloy::primitives::B256;
use serde::{Deserialize, Serialize};

/// All user operations executed by one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    pub transaction_hash: B256,
    pub block_number: u64,
    pub timestamp: u64,
    pub network: String,
    pub user_ops_length: u64,
}

impl Bundle {
    pub fn new(context: &EventContext) -> Self {
        Self {
            id: hex_id(context.transaction_hash),
            transaction_hash: context.transaction_hash,
            block_number: context.block_number,
            timestamp: context.block_timestamp,
            network: context.network.clone(),
            user_ops_length: 0,
        }
    }
}

impl Entity for Bundle {
    const KIND: EntityKind = EntityKind::Bundle;

    fn id(&self) -> &str {
        &self.id
    }
}
