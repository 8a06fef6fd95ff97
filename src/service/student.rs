use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::student::StudentRepository,
    error::{validation::ValidationError, Error},
    model::{
        api::ImportReportDto,
        student::{StudentDto, StudentRequest},
    },
    service::{record_import_failure, require_text},
    util::csv::HeaderIndex,
};

const CSV_HEADERS: [&str; 9] = [
    "Roll No",
    "Name",
    "Course",
    "Semester",
    "Email",
    "Phone",
    "Date of Birth",
    "Admission Date",
    "Address",
];

const CSV_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new instance of StudentService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn validate(request: &StudentRequest) -> Result<(), ValidationError> {
        require_text("roll_no", &request.roll_no)?;
        require_text("name", &request.name)?;
        require_text("course", &request.course)?;
        require_text("semester", &request.semester)?;
        require_text("email", &request.email)?;
        require_text("phone", &request.phone)?;

        Ok(())
    }

    pub async fn create(&self, request: &StudentRequest) -> Result<StudentDto, Error> {
        Self::validate(request)?;

        let student = StudentRepository::new(self.db).create(request).await?;

        Ok(student.into())
    }

    pub async fn get_all(&self) -> Result<Vec<StudentDto>, Error> {
        let students = StudentRepository::new(self.db).get_all().await?;

        Ok(students.into_iter().map(StudentDto::from).collect())
    }

    pub async fn get(&self, roll_no: &str) -> Result<StudentDto, Error> {
        let student = StudentRepository::new(self.db)
            .get_by_roll_no(roll_no)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "student",
                id: roll_no.to_string(),
            })?;

        Ok(student.into())
    }

    pub async fn update(
        &self,
        roll_no: &str,
        request: &StudentRequest,
    ) -> Result<StudentDto, Error> {
        Self::validate(request)?;

        let student = StudentRepository::new(self.db)
            .update(roll_no, request)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "student",
                id: roll_no.to_string(),
            })?;

        Ok(student.into())
    }

    pub async fn delete(&self, roll_no: &str) -> Result<(), Error> {
        let result = StudentRepository::new(self.db).delete(roll_no).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "student",
                id: roll_no.to_string(),
            });
        }

        Ok(())
    }

    pub async fn export_csv(&self) -> Result<String, Error> {
        let students = StudentRepository::new(self.db).get_all().await?;

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADERS)?;

        for student in students {
            writer.write_record([
                student.roll_no.as_str(),
                student.name.as_str(),
                student.course.as_str(),
                student.semester.as_str(),
                student.email.as_str(),
                student.phone.as_str(),
                &format_date(student.date_of_birth),
                &format_date(student.admission_date),
                student.address.as_deref().unwrap_or(""),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::InternalError(format!("Failed to flush CSV writer: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::ParseError(format!("Exported CSV was not valid UTF-8: {}", e)))
    }

    /// Imports students from a CSV file with a header row.
    ///
    /// Duplicate roll numbers fail the unique key and are reported per row,
    /// not rolled back across the batch.
    pub async fn import_csv(&self, content: &str) -> Result<ImportReportDto, Error> {
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let index = HeaderIndex::new(&reader.headers()?.clone());

        let repository = StudentRepository::new(self.db);
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

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(CSV_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(
    index: &HeaderIndex,
    record: &csv::StringRecord,
    name: &'static str,
) -> Result<Option<NaiveDate>, ValidationError> {
    index
        .get(record, name)
        .map(|value| {
            NaiveDate::parse_from_str(&value, CSV_DATE_FORMAT).map_err(|_| {
                ValidationError::InvalidField {
                    field: name,
                    reason: format!("{:?} is not a YYYY-MM-DD date", value),
                }
            })
        })
        .transpose()
}

fn record_to_request(
    index: &HeaderIndex,
    record: &csv::StringRecord,
) -> Result<StudentRequest, ValidationError> {
    Ok(StudentRequest {
        roll_no: index.require(record, "Roll No")?,
        name: index.require(record, "Name")?,
        course: index.require(record, "Course")?,
        semester: index.require(record, "Semester")?,
        email: index.require(record, "Email")?,
        phone: index.require(record, "Phone")?,
        date_of_birth: parse_date(index, record, "Date of Birth")?,
        admission_date: parse_date(index, record, "Admission Date")?,
        address: index.get(record, "Address"),
    })
}
