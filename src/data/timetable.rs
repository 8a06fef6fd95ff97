use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    prelude::Json, IntoActiveModel,
};

pub struct TimetableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimetableRepository<'a, C> {
    /// Creates a new instance of [`TimetableRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new weekly timetable
    ///
    /// `slots` is the JSON-serialized ordered slot list; the service layer
    /// owns the conversion from typed slots.
    pub async fn create(
        &self,
        course: &str,
        semester: &str,
        slots: Json,
    ) -> Result<entity::timetables::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let timetable = entity::timetables::ActiveModel {
            course: ActiveValue::Set(course.to_string()),
            semester: ActiveValue::Set(semester.to_string()),
            slots: ActiveValue::Set(slots),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        timetable.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::timetables::Model>, DbErr> {
        entity::prelude::Timetables::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::timetables::Model>, DbErr> {
        entity::prelude::Timetables::find_by_id(id).one(self.db).await
    }

    /// Replaces the timetable fields and stamps a fresh `updated_at`
    pub async fn update(
        &self,
        id: i32,
        course: &str,
        semester: &str,
        slots: Json,
    ) -> Result<Option<entity::timetables::Model>, DbErr> {
        let timetable = match entity::prelude::Timetables::find_by_id(id).one(self.db).await? {
            Some(timetable) => timetable,
            None => return Ok(None),
        };

        let mut timetable_am = timetable.into_active_model();
        timetable_am.course = ActiveValue::Set(course.to_string());
        timetable_am.semester = ActiveValue::Set(semester.to_string());
        timetable_am.slots = ActiveValue::Set(slots);
        timetable_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let timetable = timetable_am.update(self.db).await?;

        Ok(Some(timetable))
    }

    /// Deletes a timetable
    ///
    /// Returns OK regardless of the timetable existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Timetables::delete_by_id(id).exec(self.db).await
    }
}
