use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Syllabus::Table)
                    .if_not_exists()
                    .col(pk_auto(Syllabus::Id))
                    .col(string(Syllabus::Course))
                    .col(string(Syllabus::Semester))
                    .col(json(Syllabus::Subjects))
                    .col(string_null(Syllabus::ReferenceBooks))
                    .col(timestamp(Syllabus::CreatedAt))
                    .col(timestamp(Syllabus::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Syllabus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Syllabus {
    Table,
    Id,
    Course,
    Semester,
    Subjects,
    ReferenceBooks,
    CreatedAt,
    UpdatedAt,
}
