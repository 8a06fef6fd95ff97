use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    // The roll number is the primary key, supplied by the caller.
                    .col(
                        ColumnDef::new(Students::RollNo)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string(Students::Name))
                    .col(string(Students::Course))
                    .col(string(Students::Semester))
                    .col(string(Students::Email))
                    .col(string(Students::Phone))
                    .col(date_null(Students::DateOfBirth))
                    .col(date_null(Students::AdmissionDate))
                    .col(string_null(Students::Address))
                    .col(timestamp(Students::CreatedAt))
                    .col(timestamp(Students::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    RollNo,
    Name,
    Course,
    Semester,
    Email,
    Phone,
    DateOfBirth,
    AdmissionDate,
    Address,
    CreatedAt,
    UpdatedAt,
}
