use crate::{
    store::{Entity, EntityKind},
    types::common::hex_id,
};
use alloy::primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Canonical record of a single user operation, keyed by its hash.
///
/// Execution and revert events for the same hash update this record in
/// place; fields that the current event does not touch keep their values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOp {
    pub id: String,
    pub user_op_hash: B256,
    pub transaction_hash: Option<B256>,
    pub bundle: Option<String>,
    pub input: Option<Bytes>,
    pub sender: Option<Address>,
    pub paymaster: Option<Address>,
    pub nonce: Option<U256>,
    pub actual_gas_cost: Option<U256>,
    pub actual_gas_price: Option<U256>,
    pub actual_gas_used: Option<U256>,
    pub success: bool,
    pub revert_reason: Option<Bytes>,
    pub block_time: Option<u64>,
    pub block_number: Option<u64>,
    pub network: Option<String>,
    pub target: Option<Address>,
    pub call_data: Option<Bytes>,
    pub beneficiary: Option<Address>,
    pub factory: Option<Address>,
}

impl UserOp {
    pub fn new(user_op_hash: B256) -> Self {
        Self {
            id: hex_id(user_op_hash),
            user_op_hash,
            ..Default::default()
        }
    }
}

impl Entity for UserOp {
    const KIND: EntityKind = EntityKind::UserOp;

    fn id(&self) -> &str {
        &self.id
    }
}
