use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fees::Table)
                    .if_not_exists()
                    .col(pk_auto(Fees::Id))
                    .col(string(Fees::Course))
                    .col(integer(Fees::AdmissionFee))
                    .col(integer(Fees::SemwiseFee))
                    .col(integer_null(Fees::HostelFee))
                    .col(integer_null(Fees::BusFee))
                    .col(string_null(Fees::Scholarship))
                    .col(string_null(Fees::PaymentLink))
                    .col(timestamp(Fees::CreatedAt))
                    .col(timestamp(Fees::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fees {
    Table,
    Id,
    Course,
    AdmissionFee,
    SemwiseFee,
    HostelFee,
    BusFee,
    Scholarship,
    PaymentLink,
    CreatedAt,
    UpdatedAt,
}
