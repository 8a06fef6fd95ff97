use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    prelude::Json, IntoActiveModel,
};

pub struct SyllabusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SyllabusRepository<'a, C> {
    /// Creates a new instance of [`SyllabusRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new semester syllabus
    ///
    /// `subjects` is the JSON-serialized ordered subject list; the service
    /// layer owns the conversion from typed subjects.
    pub async fn create(
        &self,
        course: &str,
        semester: &str,
        subjects: Json,
        reference_books: Option<&str>,
    ) -> Result<entity::syllabus::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let syllabus = entity::syllabus::ActiveModel {
            course: ActiveValue::Set(course.to_string()),
            semester: ActiveValue::Set(semester.to_string()),
            subjects: ActiveValue::Set(subjects),
            reference_books: ActiveValue::Set(reference_books.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        syllabus.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::syllabus::Model>, DbErr> {
        entity::prelude::Syllabus::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::syllabus::Model>, DbErr> {
        entity::prelude::Syllabus::find_by_id(id).one(self.db).await
    }

    /// Replaces the syllabus fields and stamps a fresh `updated_at`
    pub async fn update(
        &self,
        id: i32,
        course: &str,
        semester: &str,
        subjects: Json,
        reference_books: Option<&str>,
    ) -> Result<Option<entity::syllabus::Model>, DbErr> {
        let syllabus = match entity::prelude::Syllabus::find_by_id(id).one(self.db).await? {
            Some(syllabus) => syllabus,
            None => return Ok(None),
        };

        let mut syllabus_am = syllabus.into_active_model();
        syllabus_am.course = ActiveValue::Set(course.to_string());
        syllabus_am.semester = ActiveValue::Set(semester.to_string());
        syllabus_am.subjects = ActiveValue::Set(subjects);
        syllabus_am.reference_books = ActiveValue::Set(reference_books.map(str::to_string));
        syllabus_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let syllabus = syllabus_am.update(self.db).await?;

        Ok(Some(syllabus))
    }

    /// Deletes a syllabus
    ///
    /// Returns OK regardless of the syllabus existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Syllabus::delete_by_id(id).exec(self.db).await
    }
}
