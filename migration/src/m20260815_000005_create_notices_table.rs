use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(pk_auto(Notices::Id))
                    .col(string(Notices::Title))
                    .col(text(Notices::Description))
                    .col(timestamp(Notices::PublishAt))
                    .col(date_null(Notices::ExpiresOn))
                    .col(string_null(Notices::PostedBy))
                    .col(string_null(Notices::Audience))
                    .col(string_null(Notices::AttachmentUrl))
                    .col(timestamp(Notices::CreatedAt))
                    .col(timestamp(Notices::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notices {
    Table,
    Id,
    Title,
    Description,
    PublishAt,
    ExpiresOn,
    PostedBy,
    Audience,
    AttachmentUrl,
    CreatedAt,
    UpdatedAt,
}
