pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_courses_table;
mod m20260815_000002_create_students_table;
mod m20260815_000003_create_faculty_table;
mod m20260815_000004_create_fees_table;
mod m20260815_000005_create_notices_table;
mod m20260815_000006_create_syllabus_table;
mod m20260815_000007_create_college_table;
mod m20260815_000008_create_admins_table;
mod m20260815_000009_create_timetables_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_courses_table::Migration),
            Box::new(m20260815_000002_create_students_table::Migration),
            Box::new(m20260815_000003_create_faculty_table::Migration),
            Box::new(m20260815_000004_create_fees_table::Migration),
            Box::new(m20260815_000005_create_notices_table::Migration),
            Box::new(m20260815_000006_create_syllabus_table::Migration),
            Box::new(m20260815_000007_create_college_table::Migration),
            Box::new(m20260815_000008_create_admins_table::Migration),
            Box::new(m20260815_000009_create_timetables_table::Migration),
        ]
    }
}
