use sea_orm::DatabaseConnection;

use crate::{
    data::fee::FeeRepository,
    error::{validation::ValidationError, Error},
    model::{
        api::ImportReportDto,
        fee::{FeeDto, FeeRequest},
    },
    service::{record_import_failure, require_text},
    util::csv::HeaderIndex,
};

const CSV_HEADERS: [&str; 7] = [
    "Course",
    "Admission Fee",
    "Semester Fee",
    "Hostel Fee",
    "Bus Fee",
    "Scholarship",
    "Payment Link",
];

pub struct FeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeeService<'a> {
    /// Creates a new instance of FeeService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn validate(request: &FeeRequest) -> Result<(), ValidationError> {
        require_text("course", &request.course)?;

        if request.admission_fee < 0 {
            return Err(ValidationError::InvalidField {
                field: "admission_fee",
                reason: "must not be negative".to_string(),
            });
        }
        if request.semwise_fee < 0 {
            return Err(ValidationError::InvalidField {
                field: "semwise_fee",
                reason: "must not be negative".to_string(),
            });
        }

        Ok(())
    }

    pub async fn create(&self, request: &FeeRequest) -> Result<FeeDto, Error> {
        Self::validate(request)?;

        let fee = FeeRepository::new(self.db).create(request).await?;

        Ok(fee.into())
    }

    pub async fn get_all(&self) -> Result<Vec<FeeDto>, Error> {
        let fees = FeeRepository::new(self.db).get_all().await?;

        Ok(fees.into_iter().map(FeeDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<FeeDto, Error> {
        let fee = FeeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "fee",
                id: id.to_string(),
            })?;

        Ok(fee.into())
    }

    pub async fn update(&self, id: i32, request: &FeeRequest) -> Result<FeeDto, Error> {
        Self::validate(request)?;

        let fee = FeeRepository::new(self.db)
            .update(id, request)
            .await?
            .ok_or(Error::NotFound {
                entity: "fee",
                id: id.to_string(),
            })?;

        Ok(fee.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = FeeRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "fee",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    pub async fn export_csv(&self) -> Result<String, Error> {
        let fees = FeeRepository::new(self.db).get_all().await?;

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADERS)?;

        for fee in fees {
            writer.write_record([
                fee.course.as_str(),
                &fee.admission_fee.to_string(),
                &fee.semwise_fee.to_string(),
                &fee.hostel_fee.map(|v| v.to_string()).unwrap_or_default(),
                &fee.bus_fee.map(|v| v.to_string()).unwrap_or_default(),
                fee.scholarship.as_deref().unwrap_or(""),
                fee.payment_link.as_deref().unwrap_or(""),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::InternalError(format!("Failed to flush CSV writer: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::ParseError(format!("Exported CSV was not valid UTF-8: {}", e)))
    }

    pub async fn import_csv(&self, content: &str) -> Result<ImportReportDto, Error> {
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let index = HeaderIndex::new(&reader.headers()?.clone());

        let repository = FeeRepository::new(self.db);
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
) -> Result<FeeRequest, ValidationError> {
    Ok(FeeRequest {
        course: index.require(record, "Course")?,
        admission_fee: index.require_i32(record, "Admission Fee")?,
        semwise_fee: index.require_i32(record, "Semester Fee")?,
        hostel_fee: index.get_i32(record, "Hostel Fee")?,
        bus_fee: index.get_i32(record, "Bus Fee")?,
        scholarship: index.get(record, "Scholarship"),
        payment_link: index.get(record, "Payment Link"),
    })
}

#[cfg(test)]
mod tests {

    mod import {
        use registrar_test_utils::prelude::*;

        use crate::service::fee::FeeService;

        /// A minimal row with only the required columns stores the two
        /// mandatory amounts and leaves the optional fees unset
        #[tokio::test]
        async fn imports_minimal_row() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Fees)?;
            let service = FeeService::new(&test.state.db);

            let content = "\
Course,Admission Fee,Semester Fee
BCA,5000,12000
";

            let report = service.import_csv(content).await.unwrap();

            assert_eq!(report.imported, 1);
            assert_eq!(report.skipped, 0);

            let fees = service.get_all().await.unwrap();
            assert_eq!(fees.len(), 1);
            assert_eq!(fees[0].course, "BCA");
            assert_eq!(fees[0].admission_fee, 5000);
            assert_eq!(fees[0].semwise_fee, 12000);
            assert_eq!(fees[0].hostel_fee, None);
            assert_eq!(fees[0].bus_fee, None);

            Ok(())
        }

        /// Non-numeric amounts are reported as row errors
        #[tokio::test]
        async fn rejects_non_numeric_amounts() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Fees)?;
            let service = FeeService::new(&test.state.db);

            let content = "\
Course,Admission Fee,Semester Fee
BCA,lots,12000
";

            let report = service.import_csv(content).await.unwrap();

            assert_eq!(report.imported, 0);
            assert_eq!(report.skipped, 1);
            assert_eq!(report.errors.len(), 1);

            Ok(())
        }
    }
}
