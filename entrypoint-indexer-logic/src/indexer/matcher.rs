use crate::indexer::abi::UserOperation;
use alloy::primitives::U256;

/// First operation in batch order whose nonce equals `nonce`.
///
/// Batches repeating a nonce resolve to the earliest entry.
pub fn find_by_nonce(ops: &[UserOperation], nonce: U256) -> Option<&UserOperation> {
    ops.iter().find(|op| op.nonce == nonce)
}
