use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomCommand::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomCommand::Id))
                    .col(string(CustomCommand::GuildId))
                    .col(string(CustomCommand::Name))
                    .col(text(CustomCommand::Response))
                    .col(string(CustomCommand::CreatedBy))
                    .col(timestamp_with_time_zone(CustomCommand::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One command name per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_custom_command_guild_id_name")
                    .table(CustomCommand::Table)
                    .col(CustomCommand::GuildId)
                    .col(CustomCommand::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_custom_command_guild_id_name")
                    .table(CustomCommand::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomCommand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CustomCommand {
    Table,
    Id,
    GuildId,
    Name,
    Response,
    CreatedBy,
    CreatedAt,
}
