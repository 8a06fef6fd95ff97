use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faculty::Table)
                    .if_not_exists()
                    .col(pk_auto(Faculty::Id))
                    .col(string(Faculty::Department))
                    .col(string(Faculty::HodName))
                    .col(json(Faculty::Members))
                    .col(timestamp(Faculty::CreatedAt))
                    .col(timestamp(Faculty::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faculty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faculty {
    Table,
    Id,
    Department,
    HodName,
    Members,
    CreatedAt,
    UpdatedAt,
}
