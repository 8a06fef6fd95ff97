use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::course::CourseRequest;

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    /// Creates a new instance of [`CourseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new course, stamping both timestamps
    pub async fn create(&self, request: &CourseRequest) -> Result<entity::courses::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let course = entity::courses::ActiveModel {
            name: ActiveValue::Set(request.name.clone()),
            department: ActiveValue::Set(request.department.clone()),
            affiliation: ActiveValue::Set(request.affiliation.clone()),
            duration: ActiveValue::Set(request.duration.clone()),
            total_seats: ActiveValue::Set(request.total_seats),
            fee_structure: ActiveValue::Set(request.fee_structure.clone()),
            other_fee: ActiveValue::Set(request.other_fee.clone()),
            scholarship: ActiveValue::Set(request.scholarship.clone()),
            eligibility: ActiveValue::Set(request.eligibility.clone()),
            hod_name: ActiveValue::Set(request.hod_name.clone()),
            counsellor: ActiveValue::Set(request.counsellor.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        course.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::courses::Model>, DbErr> {
        entity::prelude::Courses::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::courses::Model>, DbErr> {
        entity::prelude::Courses::find_by_id(id).one(self.db).await
    }

    /// Replaces the course's fields and stamps a fresh `updated_at`
    pub async fn update(
        &self,
        id: i32,
        request: &CourseRequest,
    ) -> Result<Option<entity::courses::Model>, DbErr> {
        let course = match entity::prelude::Courses::find_by_id(id).one(self.db).await? {
            Some(course) => course,
            None => return Ok(None),
        };

        let mut course_am = course.into_active_model();
        course_am.name = ActiveValue::Set(request.name.clone());
        course_am.department = ActiveValue::Set(request.department.clone());
        course_am.affiliation = ActiveValue::Set(request.affiliation.clone());
        course_am.duration = ActiveValue::Set(request.duration.clone());
        course_am.total_seats = ActiveValue::Set(request.total_seats);
        course_am.fee_structure = ActiveValue::Set(request.fee_structure.clone());
        course_am.other_fee = ActiveValue::Set(request.other_fee.clone());
        course_am.scholarship = ActiveValue::Set(request.scholarship.clone());
        course_am.eligibility = ActiveValue::Set(request.eligibility.clone());
        course_am.hod_name = ActiveValue::Set(request.hod_name.clone());
        course_am.counsellor = ActiveValue::Set(request.counsellor.clone());
        course_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let course = course_am.update(self.db).await?;

        Ok(Some(course))
    }

    /// Deletes a course
    ///
    /// Returns OK regardless of the course existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Courses::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use registrar_test_utils::prelude::*;

        use crate::{data::course::CourseRepository, factory};

        /// Expect success when creating a new course
        #[tokio::test]
        async fn creates_course() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;

            let repo = CourseRepository::new(&test.state.db);
            let result = repo.create(&factory::mock_course_request("BCA")).await;

            assert!(result.is_ok());
            let course = result.unwrap();
            assert_eq!(course.name, "BCA");
            assert_eq!(course.created_at, course.updated_at);

            Ok(())
        }

        /// Expect Error when the courses table does not exist
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let repo = CourseRepository::new(&test.state.db);
            let result = repo.create(&factory::mock_course_request("BCA")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_all {
        use registrar_test_utils::prelude::*;

        use crate::{data::course::CourseRepository, factory};

        /// Expect every inserted course to be returned, unfiltered
        #[tokio::test]
        async fn returns_all_courses() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let repo = CourseRepository::new(&test.state.db);

            repo.create(&factory::mock_course_request("BCA")).await?;
            repo.create(&factory::mock_course_request("MCA")).await?;

            let result = repo.get_all().await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().len(), 2);

            Ok(())
        }
    }

    mod update {
        use registrar_test_utils::prelude::*;

        use crate::{data::course::CourseRepository, factory};

        /// Expect updated fields and a fresh `updated_at` on update
        #[tokio::test]
        async fn updates_existing_course() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let repo = CourseRepository::new(&test.state.db);
            let course = repo.create(&factory::mock_course_request("BCA")).await?;

            let mut request = factory::mock_course_request("BCA");
            request.total_seats = 90;
            let result = repo.update(course.id, &request).await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.total_seats, 90);
            assert!(updated.updated_at >= course.updated_at);

            Ok(())
        }

        /// Expect Ok(None) when updating a course that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_course() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let repo = CourseRepository::new(&test.state.db);

            let result = repo.update(1, &factory::mock_course_request("BCA")).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use registrar_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::{data::course::CourseRepository, factory};

        /// Expect success when deleting a course
        #[tokio::test]
        async fn deletes_existing_course() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let repo = CourseRepository::new(&test.state.db);
            let course = repo.create(&factory::mock_course_request("BCA")).await?;

            let result = repo.delete(course.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            let exists = entity::prelude::Courses::find_by_id(course.id)
                .one(&test.state.db)
                .await?;
            assert!(exists.is_none());

            Ok(())
        }

        /// Expect no rows to be affected when deleting a course that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_course() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let repo = CourseRepository::new(&test.state.db);

            let result = repo.delete(1).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 0);

            Ok(())
        }
    }
}
