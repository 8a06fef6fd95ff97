use sea_orm::DatabaseConnection;

use crate::{
    data::course::CourseRepository,
    error::{validation::ValidationError, Error},
    model::{
        api::ImportReportDto,
        course::{CourseDto, CourseRequest},
    },
    service::{record_import_failure, require_text},
    util::csv::HeaderIndex,
};

const CSV_HEADERS: [&str; 11] = [
    "Name",
    "Department",
    "Affiliation",
    "Duration",
    "Total Seats",
    "Fee Structure",
    "Other Fee",
    "Scholarship",
    "Eligibility",
    "HOD",
    "Counsellor",
];

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    /// Creates a new instance of CourseService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a course request without touching the database.
    pub fn validate(request: &CourseRequest) -> Result<(), ValidationError> {
        require_text("name", &request.name)?;
        require_text("department", &request.department)?;
        require_text("affiliation", &request.affiliation)?;
        require_text("duration", &request.duration)?;
        require_text("fee_structure", &request.fee_structure)?;

        if request.total_seats <= 0 {
            return Err(ValidationError::InvalidField {
                field: "total_seats",
                reason: "must be a positive integer".to_string(),
            });
        }

        Ok(())
    }

    pub async fn create(&self, request: &CourseRequest) -> Result<CourseDto, Error> {
        Self::validate(request)?;

        let course = CourseRepository::new(self.db).create(request).await?;

        Ok(course.into())
    }

    pub async fn get_all(&self) -> Result<Vec<CourseDto>, Error> {
        let courses = CourseRepository::new(self.db).get_all().await?;

        Ok(courses.into_iter().map(CourseDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<CourseDto, Error> {
        let course = CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "course",
                id: id.to_string(),
            })?;

        Ok(course.into())
    }

    pub async fn update(&self, id: i32, request: &CourseRequest) -> Result<CourseDto, Error> {
        Self::validate(request)?;

        let course = CourseRepository::new(self.db)
            .update(id, request)
            .await?
            .ok_or(Error::NotFound {
                entity: "course",
                id: id.to_string(),
            })?;

        Ok(course.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = CourseRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "course",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// Serializes every course to CSV with a stable header row.
    pub async fn export_csv(&self) -> Result<String, Error> {
        let courses = CourseRepository::new(self.db).get_all().await?;

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADERS)?;

        for course in courses {
            writer.write_record([
                course.name.as_str(),
                course.department.as_str(),
                course.affiliation.as_str(),
                course.duration.as_str(),
                &course.total_seats.to_string(),
                course.fee_structure.as_str(),
                course.other_fee.as_deref().unwrap_or(""),
                course.scholarship.as_deref().unwrap_or(""),
                course.eligibility.as_deref().unwrap_or(""),
                course.hod_name.as_deref().unwrap_or(""),
                course.counsellor.as_deref().unwrap_or(""),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::InternalError(format!("Failed to flush CSV writer: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::ParseError(format!("Exported CSV was not valid UTF-8: {}", e)))
    }

    /// Imports courses from a CSV file with a header row.
    ///
    /// Each surviving row is written as a new course; rows with missing
    /// required columns or invalid values are skipped and reported.
    pub async fn import_csv(&self, content: &str) -> Result<ImportReportDto, Error> {
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let index = HeaderIndex::new(&reader.headers()?.clone());

        let repository = CourseRepository::new(self.db);
        let mut report = ImportReportDto {
            imported: 0,
            skipped: 0,
            errors: Vec::new(),
        };

        for (i, record) in reader.records().enumerate() {
            let line = i + 2;

            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    record_import_failure(&mut report, line, e.to_string());
                    continue;
                }
            };

            let request = match record_to_request(&index, &record) {
                Ok(request) => request,
                Err(e) => {
                    record_import_failure(&mut report, line, e.to_string());
                    continue;
                }
            };

            if let Err(e) = Self::validate(&request) {
                record_import_failure(&mut report, line, e.to_string());
                continue;
            }

            match repository.create(&request).await {
                Ok(_) => report.imported += 1,
                Err(e) => record_import_failure(&mut report, line, e.to_string()),
            }
        }

        Ok(report)
    }
}

fn record_to_request(
    index: &HeaderIndex,
    record: &csv::StringRecord,
) -> Result<CourseRequest, ValidationError> {
    Ok(CourseRequest {
        name: index.require(record, "Name")?,
        department: index.require(record, "Department")?,
        affiliation: index.require(record, "Affiliation")?,
        duration: index.require(record, "Duration")?,
        total_seats: index.require_i32(record, "Total Seats")?,
        fee_structure: index.require(record, "Fee Structure")?,
        other_fee: index.get(record, "Other Fee"),
        scholarship: index.get(record, "Scholarship"),
        eligibility: index.get(record, "Eligibility"),
        hod_name: index.get(record, "HOD"),
        counsellor: index.get(record, "Counsellor"),
    })
}

#[cfg(test)]
mod tests {

    mod validate {
        use registrar_test_utils::prelude::*;

        use crate::{
            error::{validation::ValidationError, Error},
            factory,
            service::course::CourseService,
        };

        /// Expect a missing required field to reject before any repository
        /// call, no courses table exists in this setup
        #[tokio::test]
        async fn rejects_before_touching_database() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let mut request = factory::mock_course_request("BCA");
            request.name = "".to_string();

            let result = CourseService::new(&test.state.db).create(&request).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingField("name")))
            ));

            Ok(())
        }

        /// Expect zero or negative seat counts to be rejected
        #[tokio::test]
        async fn rejects_nonpositive_seats() -> Result<(), TestError> {
            let mut request = factory::mock_course_request("BCA");
            request.total_seats = 0;

            let result = CourseService::validate(&request);

            assert!(matches!(
                result,
                Err(ValidationError::InvalidField {
                    field: "total_seats",
                    ..
                })
            ));

            Ok(())
        }
    }

    mod save {
        use registrar_test_utils::prelude::*;

        use crate::{factory, service::course::CourseService};

        /// Expect a created course to appear in a subsequent full read with a
        /// matching name and a non-stale `updated_at`
        #[tokio::test]
        async fn created_course_is_listed() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let service = CourseService::new(&test.state.db);

            let before = chrono::Utc::now().naive_utc();
            service
                .create(&factory::mock_course_request("BCA"))
                .await
                .unwrap();

            let courses = service.get_all().await.unwrap();

            assert_eq!(courses.len(), 1);
            assert_eq!(courses[0].name, "BCA");
            assert!(courses[0].updated_at >= before);

            Ok(())
        }

        /// Expect a deleted course to disappear from the listing
        #[tokio::test]
        async fn deleted_course_is_not_listed() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let service = CourseService::new(&test.state.db);

            let course = service
                .create(&factory::mock_course_request("BCA"))
                .await
                .unwrap();
            service.delete(course.id).await.unwrap();

            let courses = service.get_all().await.unwrap();

            assert!(courses.is_empty());

            Ok(())
        }
    }

    mod csv {
        use registrar_test_utils::prelude::*;

        use crate::{factory, service::course::CourseService};

        /// Expect export followed by import to reproduce equivalent records,
        /// modulo id reassignment
        #[tokio::test]
        async fn export_import_round_trips() -> Result<(), TestError> {
            let source = test_setup_with_tables!(entity::prelude::Courses)?;
            let source_service = CourseService::new(&source.state.db);
            source_service
                .create(&factory::mock_course_request("BCA"))
                .await
                .unwrap();
            source_service
                .create(&factory::mock_course_request("MCA"))
                .await
                .unwrap();

            let exported = source_service.export_csv().await.unwrap();

            let target = test_setup_with_tables!(entity::prelude::Courses)?;
            let target_service = CourseService::new(&target.state.db);
            let report = target_service.import_csv(&exported).await.unwrap();

            assert_eq!(report.imported, 2);
            assert_eq!(report.skipped, 0);

            let mut names: Vec<String> = target_service
                .get_all()
                .await
                .unwrap()
                .into_iter()
                .map(|c| c.name)
                .collect();
            names.sort();
            assert_eq!(names, vec!["BCA".to_string(), "MCA".to_string()]);

            Ok(())
        }

        /// Expect rows missing required columns to be skipped and reported
        /// while surviving rows still import
        #[tokio::test]
        async fn import_is_best_effort() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Courses)?;
            let service = CourseService::new(&test.state.db);

            let content = "\
Name,Department,Affiliation,Duration,Total Seats,Fee Structure
BCA,Computer Applications,State University,3 Years,60,45000/year
,Computer Applications,State University,3 Years,60,45000/year
MCA,Computer Applications,State University,2 Years,forty,60000/year
";

            let report = service.import_csv(content).await.unwrap();

            assert_eq!(report.imported, 1);
            assert_eq!(report.skipped, 2);
            assert_eq!(report.errors.len(), 2);

            Ok(())
        }
    }
}
