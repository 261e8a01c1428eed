use super::{EntityKind, Store, StoreError};
use async_trait::async_trait;
use entity::entrypoint_records;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, prelude::Expr, sea_query::OnConflict,
};
use serde_json::Value;
use std::sync::Arc;

/// Postgres-backed store over the `entrypoint_records` table.
#[derive(Clone)]
pub struct DatabaseStore {
    db: Arc<DatabaseConnection>,
}

impl DatabaseStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for DatabaseStore {
    async fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Value>, StoreError> {
        let record = entrypoint_records::Entity::find_by_id((kind.to_string(), id.to_string()))
            .one(self.db.as_ref())
            .await?;
        Ok(record.map(|r| r.data))
    }

    async fn save(&self, kind: EntityKind, id: &str, record: Value) -> Result<(), StoreError> {
        let model = entrypoint_records::ActiveModel {
            kind: Set(kind.to_string()),
            id: Set(id.to_string()),
            data: Set(record),
            ..Default::default()
        };
        entrypoint_records::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    entrypoint_records::Column::Kind,
                    entrypoint_records::Column::Id,
                ])
                .update_column(entrypoint_records::Column::Data)
                .value(entrypoint_records::Column::UpdatedAt, Expr::current_timestamp())
                .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(())
    }
}
