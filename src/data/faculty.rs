use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    prelude::Json, IntoActiveModel,
};

pub struct FacultyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FacultyRepository<'a, C> {
    /// Creates a new instance of [`FacultyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new department faculty group
    ///
    /// `members` is the JSON-serialized ordered member list; the service layer
    /// owns the conversion from typed members.
    pub async fn create(
        &self,
        department: &str,
        hod_name: &str,
        members: Json,
    ) -> Result<entity::faculty::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let faculty = entity::faculty::ActiveModel {
            department: ActiveValue::Set(department.to_string()),
            hod_name: ActiveValue::Set(hod_name.to_string()),
            members: ActiveValue::Set(members),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        faculty.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::faculty::Model>, DbErr> {
        entity::prelude::Faculty::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::faculty::Model>, DbErr> {
        entity::prelude::Faculty::find_by_id(id).one(self.db).await
    }

    /// Replaces the group's fields and stamps a fresh `updated_at`
    pub async fn update(
        &self,
        id: i32,
        department: &str,
        hod_name: &str,
        members: Json,
    ) -> Result<Option<entity::faculty::Model>, DbErr> {
        let faculty = match entity::prelude::Faculty::find_by_id(id).one(self.db).await? {
            Some(faculty) => faculty,
            None => return Ok(None),
        };

        let mut faculty_am = faculty.into_active_model();
        faculty_am.department = ActiveValue::Set(department.to_string());
        faculty_am.hod_name = ActiveValue::Set(hod_name.to_string());
        faculty_am.members = ActiveValue::Set(members);
        faculty_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let faculty = faculty_am.update(self.db).await?;

        Ok(Some(faculty))
    }

    /// Deletes a department faculty group
    ///
    /// Returns OK regardless of the group existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Faculty::delete_by_id(id).exec(self.db).await
    }
}
