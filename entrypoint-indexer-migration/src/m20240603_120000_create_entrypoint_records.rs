use sea_orm_migration::prelude::*;

const KIND_UPDATED_AT_INDEX: &str = "entrypoint_records_kind_updated_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntrypointRecords::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EntrypointRecords::Kind).string().not_null())
                    .col(ColumnDef::new(EntrypointRecords::Id).string().not_null())
                    .col(
                        ColumnDef::new(EntrypointRecords::Data)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrypointRecords::CreatedAt)
                            .date_time()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrypointRecords::UpdatedAt)
                            .date_time()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EntrypointRecords::Kind)
                            .col(EntrypointRecords::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // recently touched records of one kind
        manager
            .create_index(
                Index::create()
                    .name(KIND_UPDATED_AT_INDEX)
                    .table(EntrypointRecords::Table)
                    .col(EntrypointRecords::Kind)
                    .col((EntrypointRecords::UpdatedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(KIND_UPDATED_AT_INDEX)
                    .table(EntrypointRecords::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(EntrypointRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EntrypointRecords {
    Table,
    Kind,
    Id,
    Data,
    CreatedAt,
    UpdatedAt,
}
