use crate::{
    repository,
    store::{Store, StoreError},
    types::registry::{AddressRole, EvmAddress, HashRecord, HashRole},
};
use alloy::primitives::{Address, B256};

/// Records the address under `role` unless it is already known, in which
/// case the existing role is kept.
pub async fn register_address(
    store: &dyn Store,
    address: Address,
    role: AddressRole,
) -> Result<bool, StoreError> {
    let created = repository::insert_if_absent(store, &EvmAddress::new(address, role)).await?;
    if !created {
        tracing::trace!(%address, %role, "address already registered");
    }
    Ok(created)
}

/// Records the hash under `role` unless it is already known.
pub async fn register_hash(
    store: &dyn Store,
    hash: B256,
    role: HashRole,
) -> Result<bool, StoreError> {
    let created = repository::insert_if_absent(store, &HashRecord::new(hash, role)).await?;
    if !created {
        tracing::trace!(%hash, %role, "hash already registered");
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store::MemoryStore, types::common::hex_id};
    use alloy::primitives::address;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn first_address_role_wins() {
        let store = MemoryStore::new();
        let address = address!("0xdbd510f9ebb7a81209fccd12a56f6c6354aa8cab");

        assert!(
            register_address(&store, address, AddressRole::Beneficiary)
                .await
                .unwrap()
        );
        assert!(
            !register_address(&store, address, AddressRole::Paymaster)
                .await
                .unwrap()
        );

        let record: EvmAddress = repository::load(&store, &hex_id(address))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record, EvmAddress::new(address, AddressRole::Beneficiary));
    }

    #[tokio::test]
    async fn first_hash_role_wins() {
        let store = MemoryStore::new();
        let hash = B256::repeat_byte(0x42);

        register_hash(&store, hash, HashRole::UserOpHash)
            .await
            .unwrap();
        register_hash(&store, hash, HashRole::TransactionHash)
            .await
            .unwrap();

        let record: HashRecord = repository::load(&store, &hex_id(hash))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.hash_type, HashRole::UserOpHash);
    }
}
