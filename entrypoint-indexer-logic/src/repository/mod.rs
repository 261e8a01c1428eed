pub mod bundle;
pub mod checkpoint;
pub mod registry;

use crate::store::{Entity, Store, StoreError};

pub async fn load<E: Entity>(store: &dyn Store, id: &str) -> Result<Option<E>, StoreError> {
    let Some(value) = store.load(E::KIND, id).await? else {
        return Ok(None);
    };
    serde_json::from_value(value)
        .map(Some)
        .map_err(|source| StoreError::Serialization {
            kind: E::KIND,
            id: id.to_string(),
            source,
        })
}

/// Upserts the record. Fails without writing if its id is empty or does not
/// have the shape required by its kind.
pub async fn save<E: Entity>(store: &dyn Store, entity: &E) -> Result<(), StoreError> {
    let id = entity.id();
    E::KIND.validate_id(id)?;
    let value = serde_json::to_value(entity).map_err(|source| StoreError::Serialization {
        kind: E::KIND,
        id: id.to_string(),
        source,
    })?;
    store.save(E::KIND, id, value).await
}

/// Saves the record only if nothing is stored under its id yet.
/// Returns whether the record was written.
pub async fn insert_if_absent<E: Entity>(store: &dyn Store, entity: &E) -> Result<bool, StoreError> {
    if store.load(E::KIND, entity.id()).await?.is_some() {
        return Ok(false);
    }
    save(store, entity).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        store::{EntityKind, MemoryStore},
        types::{checkpoint::Checkpoint, user_op::UserOp},
    };
    use alloy::primitives::B256;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn save_then_load() {
        let store = MemoryStore::new();
        let mut user_op = UserOp::new(B256::repeat_byte(0xab));
        user_op.success = true;

        save(&store, &user_op).await.unwrap();

        let loaded: UserOp = load(&store, &user_op.id).await.unwrap().unwrap();
        assert_eq!(loaded, user_op);
    }

    #[tokio::test]
    async fn save_rejects_missing_and_invalid_ids() {
        let store = MemoryStore::new();

        let err = save(&store, &UserOp::default()).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingId {
                kind: EntityKind::UserOp
            }
        ));

        let mut user_op = UserOp::new(B256::repeat_byte(0xab));
        user_op.id = "0x5ff137d4b0fdcd49dca30c7cf57e578a026d2789".to_string();
        let err = save(&store, &user_op).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId { .. }));

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn insert_if_absent_keeps_first_record() {
        let store = MemoryStore::new();
        let first = Checkpoint {
            id: "mainnet".to_string(),
            block_number: 1,
        };
        let second = Checkpoint {
            id: "mainnet".to_string(),
            block_number: 2,
        };

        assert!(insert_if_absent(&store, &first).await.unwrap());
        assert!(!insert_if_absent(&store, &second).await.unwrap());

        let stored: Checkpoint = load(&store, "mainnet").await.unwrap().unwrap();
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn load_reports_malformed_records() {
        let store = MemoryStore::new();
        store
            .save(
                EntityKind::Checkpoint,
                "mainnet",
                serde_json::json!({"block_number": "not a number"}),
            )
            .await
            .unwrap();

        let err = load::<Checkpoint>(&store, "mainnet").await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }
}
