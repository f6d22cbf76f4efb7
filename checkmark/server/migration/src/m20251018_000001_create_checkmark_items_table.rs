use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const DEFAULT_PRIORITY: &str = "Medium";
const IDX_CHECKMARK_ITEMS_IS_COMPLETED: &str = "idx-checkmark_items-is_completed";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckmarkItems::Table)
                    .if_not_exists()
                    .col(pk_auto(CheckmarkItems::Id))
                    .col(string(CheckmarkItems::Title))
                    .col(text(CheckmarkItems::Description).default(""))
                    .col(boolean(CheckmarkItems::IsCompleted).default(false))
                    .col(date_null(CheckmarkItems::DueDate))
                    // Priority is persisted by name: Low, Medium or High.
                    .col(string(CheckmarkItems::Priority).default(DEFAULT_PRIORITY))
                    .col(timestamp_with_time_zone(CheckmarkItems::CreatedAt))
                    .col(timestamp_with_time_zone_null(CheckmarkItems::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHECKMARK_ITEMS_IS_COMPLETED)
                    .table(CheckmarkItems::Table)
                    .col(CheckmarkItems::IsCompleted)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHECKMARK_ITEMS_IS_COMPLETED)
                    .table(CheckmarkItems::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CheckmarkItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CheckmarkItems {
    Table,
    Id,
    Title,
    Description,
    IsCompleted,
    DueDate,
    Priority,
    CreatedAt,
    UpdatedAt,
}
