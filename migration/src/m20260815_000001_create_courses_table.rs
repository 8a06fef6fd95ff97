use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk_auto(Courses::Id))
                    .col(string(Courses::Name))
                    .col(string(Courses::Department))
                    .col(string(Courses::Affiliation))
                    .col(string(Courses::Duration))
                    .col(integer(Courses::TotalSeats))
                    .col(string(Courses::FeeStructure))
                    .col(string_null(Courses::OtherFee))
                    .col(string_null(Courses::Scholarship))
                    .col(string_null(Courses::Eligibility))
                    .col(string_null(Courses::HodName))
                    .col(string_null(Courses::Counsellor))
                    .col(timestamp(Courses::CreatedAt))
                    .col(timestamp(Courses::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Name,
    Department,
    Affiliation,
    Duration,
    TotalSeats,
    FeeStructure,
    OtherFee,
    Scholarship,
    Eligibility,
    HodName,
    Counsellor,
    CreatedAt,
    UpdatedAt,
}
