use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timetables::Table)
                    .if_not_exists()
                    .col(pk_auto(Timetables::Id))
                    .col(string(Timetables::Course))
                    .col(string(Timetables::Semester))
                    .col(json(Timetables::Slots))
                    .col(timestamp(Timetables::CreatedAt))
                    .col(timestamp(Timetables::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timetables::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Timetables {
    Table,
    Id,
    Course,
    Semester,
    Slots,
    CreatedAt,
    UpdatedAt,
}
