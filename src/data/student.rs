use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::student::StudentRequest;

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student keyed by roll number
    ///
    /// The roll number is the primary key; inserting a duplicate surfaces as a
    /// unique-constraint [`DbErr`].
    pub async fn create(
        &self,
        request: &StudentRequest,
    ) -> Result<entity::students::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let student = entity::students::ActiveModel {
            roll_no: ActiveValue::Set(request.roll_no.clone()),
            name: ActiveValue::Set(request.name.clone()),
            course: ActiveValue::Set(request.course.clone()),
            semester: ActiveValue::Set(request.semester.clone()),
            email: ActiveValue::Set(request.email.clone()),
            phone: ActiveValue::Set(request.phone.clone()),
            date_of_birth: ActiveValue::Set(request.date_of_birth),
            admission_date: ActiveValue::Set(request.admission_date),
            address: ActiveValue::Set(request.address.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        student.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::students::Model>, DbErr> {
        entity::prelude::Students::find().all(self.db).await
    }

    pub async fn get_by_roll_no(
        &self,
        roll_no: &str,
    ) -> Result<Option<entity::students::Model>, DbErr> {
        entity::prelude::Students::find_by_id(roll_no)
            .one(self.db)
            .await
    }

    /// Replaces the student's fields and stamps a fresh `updated_at`
    ///
    /// The roll number itself is immutable; the request's `roll_no` field is
    /// ignored here.
    pub async fn update(
        &self,
        roll_no: &str,
        request: &StudentRequest,
    ) -> Result<Option<entity::students::Model>, DbErr> {
        let student = match entity::prelude::Students::find_by_id(roll_no)
            .one(self.db)
            .await?
        {
            Some(student) => student,
            None => return Ok(None),
        };

        let mut student_am = student.into_active_model();
        student_am.name = ActiveValue::Set(request.name.clone());
        student_am.course = ActiveValue::Set(request.course.clone());
        student_am.semester = ActiveValue::Set(request.semester.clone());
        student_am.email = ActiveValue::Set(request.email.clone());
        student_am.phone = ActiveValue::Set(request.phone.clone());
        student_am.date_of_birth = ActiveValue::Set(request.date_of_birth);
        student_am.admission_date = ActiveValue::Set(request.admission_date);
        student_am.address = ActiveValue::Set(request.address.clone());
        student_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let student = student_am.update(self.db).await?;

        Ok(Some(student))
    }

    /// Deletes a student
    ///
    /// Returns OK regardless of the student existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, roll_no: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Students::delete_by_id(roll_no)
            .exec(self.db)
            .await
    }
}
