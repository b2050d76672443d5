use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMapping::Table)
                    .if_not_exists()
                    .col(pk_auto(UserMapping::Id))
                    .col(string_uniq(UserMapping::DiscordId))
                    .col(string(UserMapping::AccountName))
                    .col(timestamp_with_time_zone(UserMapping::CreatedAt))
                    .col(timestamp_with_time_zone(UserMapping::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMapping::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserMapping {
    Table,
    Id,
    DiscordId,
    AccountName,
    CreatedAt,
    UpdatedAt,
}
