use alloy::primitives::B256;

/// Lower-case, `0x`-prefixed hex rendering used for every byte-derived id.
pub fn hex_id(bytes: impl AsRef<[u8]>) -> String {
    alloy::hex::encode_prefixed(bytes)
}

/// Id of a per-log record: transaction hash followed by the big-endian log index.
pub fn log_record_id(transaction_hash: B256, log_index: u32) -> String {
    let mut id = Vec::with_capacity(36);
    id.extend_from_slice(transaction_hash.as_slice());
    id.extend_from_slice(&log_index.to_be_bytes());
    hex_id(id)
}
