mod database;
mod memory;

pub use database::DatabaseStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Every record type the indexer persists. The string form is the `kind`
/// column of the records table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    UserOp,
    Bundle,
    EvmAddress,
    Hash,
    AccountDeployed,
    Deposited,
    SignatureAggregatorChanged,
    StakeLocked,
    StakeUnlocked,
    StakeWithdrawn,
    Withdrawn,
    Checkpoint,
}

impl EntityKind {
    /// Number of raw bytes behind a hex id, or `None` for free-form ids.
    fn id_bytes(&self) -> Option<usize> {
        match self {
            EntityKind::UserOp | EntityKind::Bundle | EntityKind::Hash => Some(32),
            EntityKind::EvmAddress => Some(20),
            EntityKind::AccountDeployed
            | EntityKind::Deposited
            | EntityKind::SignatureAggregatorChanged
            | EntityKind::StakeLocked
            | EntityKind::StakeUnlocked
            | EntityKind::StakeWithdrawn
            | EntityKind::Withdrawn => Some(36),
            EntityKind::Checkpoint => None,
        }
    }

    pub fn validate_id(&self, id: &str) -> Result<(), StoreError> {
        if id.is_empty() {
            return Err(StoreError::MissingId { kind: *self });
        }
        let Some(bytes) = self.id_bytes() else {
            return Ok(());
        };
        let valid = id.strip_prefix("0x").is_some_and(|hex| {
            hex.len() == bytes * 2
                && hex
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        });
        if valid {
            Ok(())
        } else {
            Err(StoreError::InvalidId {
                kind: *self,
                id: id.to_string(),
            })
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} record has no id")]
    MissingId { kind: EntityKind },
    #[error("invalid {kind} id: {id}")]
    InvalidId { kind: EntityKind, id: String },
    #[error("failed to convert {kind} record {id}: {source}")]
    Serialization {
        kind: EntityKind,
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("db error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

/// Upsert-capable key-value storage addressed by `(kind, id)`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Value>, StoreError>;

    async fn save(&self, kind: EntityKind, id: &str, record: Value) -> Result<(), StoreError>;
}

/// A typed record stored under a single [`EntityKind`].
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}
