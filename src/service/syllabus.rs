use sea_orm::DatabaseConnection;

use crate::{
    data::syllabus::SyllabusRepository,
    error::{validation::ValidationError, Error},
    model::syllabus::{SyllabusDto, SyllabusRequest, SyllabusSubject},
    service::require_text,
};

const CSV_HEADERS: [&str; 6] = [
    "Course",
    "Semester",
    "Subject",
    "Code",
    "Marks",
    "Credits",
];

pub struct SyllabusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyllabusService<'a> {
    /// Creates a new instance of SyllabusService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn validate(request: &SyllabusRequest) -> Result<(), ValidationError> {
        require_text("course", &request.course)?;
        require_text("semester", &request.semester)?;

        for subject in &request.subjects {
            require_text("subjects.name", &subject.name)?;
            require_text("subjects.code", &subject.code)?;
        }

        Ok(())
    }

    pub async fn create(&self, request: &SyllabusRequest) -> Result<SyllabusDto, Error> {
        Self::validate(request)?;

        let subjects = serde_json::to_value(&request.subjects)?;
        let syllabus = SyllabusRepository::new(self.db)
            .create(
                &request.course,
                &request.semester,
                subjects,
                request.reference_books.as_deref(),
            )
            .await?;

        to_dto(syllabus)
    }

    pub async fn get_all(&self) -> Result<Vec<SyllabusDto>, Error> {
        let syllabus = SyllabusRepository::new(self.db).get_all().await?;

        syllabus.into_iter().map(to_dto).collect()
    }

    pub async fn get(&self, id: i32) -> Result<SyllabusDto, Error> {
        let syllabus = SyllabusRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "syllabus",
                id: id.to_string(),
            })?;

        to_dto(syllabus)
    }

    pub async fn update(&self, id: i32, request: &SyllabusRequest) -> Result<SyllabusDto, Error> {
        Self::validate(request)?;

        let subjects = serde_json::to_value(&request.subjects)?;
        let syllabus = SyllabusRepository::new(self.db)
            .update(
                id,
                &request.course,
                &request.semester,
                subjects,
                request.reference_books.as_deref(),
            )
            .await?
            .ok_or(Error::NotFound {
                entity: "syllabus",
                id: id.to_string(),
            })?;

        to_dto(syllabus)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = SyllabusRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "syllabus",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// Flattens every syllabus to one CSV row per subject.
    ///
    /// Export only; the unit-content HTML does not fit a flat row, so the
    /// export carries the tabular columns and drops the rich text.
    pub async fn export_csv(&self) -> Result<String, Error> {
        let syllabus = self.get_all().await?;

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADERS)?;

        for entry in syllabus {
            for subject in &entry.subjects {
                writer.write_record([
                    entry.course.as_str(),
                    entry.semester.as_str(),
                    subject.name.as_str(),
                    subject.code.as_str(),
                    &subject.marks.map(|v| v.to_string()).unwrap_or_default(),
                    &subject.credits.map(|v| v.to_string()).unwrap_or_default(),
                ])?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::InternalError(format!("Failed to flush CSV writer: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::ParseError(format!("Exported CSV was not valid UTF-8: {}", e)))
    }
}

fn to_dto(model: entity::syllabus::Model) -> Result<SyllabusDto, Error> {
    let subjects: Vec<SyllabusSubject> = serde_json::from_value(model.subjects)?;

    Ok(SyllabusDto {
        id: model.id,
        course: model.course,
        semester: model.semester,
        subjects,
        reference_books: model.reference_books,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

#[cfg(test)]
mod tests {

    mod save {
        use registrar_test_utils::prelude::*;

        use crate::{factory, service::syllabus::SyllabusService};

        /// Expect the subject list, including the rich-text content field, to
        /// survive the JSON column round trip
        #[tokio::test]
        async fn preserves_subjects() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Syllabus)?;
            let service = SyllabusService::new(&test.state.db);

            let mut request = factory::mock_syllabus_request("BCA", "1");
            request.subjects[0].content = Some("<p>Unit I: Number systems</p>".to_string());

            let created = service.create(&request).await.unwrap();
            let fetched = service.get(created.id).await.unwrap();

            assert_eq!(fetched.subjects, request.subjects);

            Ok(())
        }

        /// Expect a subject with a blank code to reject the whole request
        #[tokio::test]
        async fn rejects_blank_subject_code() -> Result<(), TestError> {
            let mut request = factory::mock_syllabus_request("BCA", "1");
            request.subjects[0].code = "".to_string();

            let result = SyllabusService::validate(&request);

            assert!(result.is_err());

            Ok(())
        }
    }
}
