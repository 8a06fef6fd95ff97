use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(College::Table)
                    .if_not_exists()
                    .col(pk_auto(College::Id))
                    .col(string(College::Name))
                    .col(integer(College::EstablishedYear))
                    .col(string(College::Affiliation))
                    .col(string_null(College::Accreditation))
                    .col(string(College::Address))
                    .col(string(College::Phone))
                    .col(string(College::Email))
                    .col(string_null(College::Website))
                    .col(string_null(College::Principal))
                    .col(timestamp(College::CreatedAt))
                    .col(timestamp(College::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(College::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum College {
    Table,
    Id,
    Name,
    EstablishedYear,
    Affiliation,
    Accreditation,
    Address,
    Phone,
    Email,
    Website,
    Principal,
    CreatedAt,
    UpdatedAt,
}
