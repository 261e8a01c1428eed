use crate::{
    store::{Entity, EntityKind},
    types::common::hex_id,
};
use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressRole {
    Wallet,
    Paymaster,
    Factory,
    Beneficiary,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HashRole {
    TransactionHash,
    UserOpHash,
}

/// First role an address was seen in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvmAddress {
    pub id: String,
    pub address: Address,
    pub address_type: AddressRole,
}

impl EvmAddress {
    pub fn new(address: Address, address_type: AddressRole) -> Self {
        Self {
            id: hex_id(address),
            address,
            address_type,
        }
    }
}

impl Entity for EvmAddress {
    const KIND: EntityKind = EntityKind::EvmAddress;

    fn id(&self) -> &str {
        &self.id
    }
}

/// First role a hash was seen in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRecord {
    pub id: String,
    pub hash: B256,
    pub hash_type: HashRole,
}

impl HashRecord {
    pub fn new(hash: B256, hash_type: HashRole) -> Self {
        Self {
            id: hex_id(hash),
            hash,
            hash_type,
        }
    }
}

impl Entity for HashRecord {
    const KIND: EntityKind = EntityKind::Hash;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roles_serialize_as_screaming_snake_case() {
        assert_eq!(AddressRole::Beneficiary.to_string(), "BENEFICIARY");
        assert_eq!(
            serde_json::to_value(HashRole::UserOpHash).unwrap(),
            json!("USER_OP_HASH")
        );
        assert_eq!(
            "TRANSACTION_HASH".parse::<HashRole>().unwrap(),
            HashRole::TransactionHash
        );
    }
}
