pub use sea_orm_migration::prelude::*;

mod m20240603_120000_create_entrypoint_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20240603_120000_create_entrypoint_records::Migration,
        )]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("entrypoint_indexer_migrations").into_iden()
    }
}
