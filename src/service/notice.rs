use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::notice::NoticeRepository,
    error::{validation::ValidationError, Error},
    model::{
        api::ImportReportDto,
        notice::{NoticeDto, NoticeRequest, NoticeStatus},
    },
    service::{record_import_failure, require_text},
    util::csv::HeaderIndex,
};

const CSV_HEADERS: [&str; 7] = [
    "Title",
    "Description",
    "Publish At",
    "Expires On",
    "Posted By",
    "Audience",
    "Attachment",
];

const CSV_DATE_FORMAT: &str = "%Y-%m-%d";
const CSV_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    /// Creates a new instance of NoticeService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn validate(request: &NoticeRequest) -> Result<(), ValidationError> {
        require_text("title", &request.title)?;
        require_text("description", &request.description)?;

        Ok(())
    }

    pub async fn create(&self, request: &NoticeRequest) -> Result<NoticeDto, Error> {
        Self::validate(request)?;

        let notice = NoticeRepository::new(self.db).create(request).await?;

        Ok(to_dto(notice, Utc::now().naive_utc()))
    }

    /// Returns all notices with their status derived against the current time.
    pub async fn get_all(&self) -> Result<Vec<NoticeDto>, Error> {
        let notices = NoticeRepository::new(self.db).get_all().await?;
        let now = Utc::now().naive_utc();

        Ok(notices.into_iter().map(|n| to_dto(n, now)).collect())
    }

    pub async fn get(&self, id: i32) -> Result<NoticeDto, Error> {
        let notice = NoticeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "notice",
                id: id.to_string(),
            })?;

        Ok(to_dto(notice, Utc::now().naive_utc()))
    }

    pub async fn update(&self, id: i32, request: &NoticeRequest) -> Result<NoticeDto, Error> {
        Self::validate(request)?;

        let notice = NoticeRepository::new(self.db)
            .update(id, request)
            .await?
            .ok_or(Error::NotFound {
                entity: "notice",
                id: id.to_string(),
            })?;

        Ok(to_dto(notice, Utc::now().naive_utc()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = NoticeRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "notice",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    pub async fn export_csv(&self) -> Result<String, Error> {
        let notices = NoticeRepository::new(self.db).get_all().await?;

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADERS)?;

        for notice in notices {
            writer.write_record([
                notice.title.as_str(),
                notice.description.as_str(),
                &notice.publish_at.format(CSV_DATETIME_FORMAT).to_string(),
                &notice
                    .expires_on
                    .map(|d| d.format(CSV_DATE_FORMAT).to_string())
                    .unwrap_or_default(),
                notice.posted_by.as_deref().unwrap_or(""),
                notice.audience.as_deref().unwrap_or(""),
                notice.attachment_url.as_deref().unwrap_or(""),
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

        let repository = NoticeRepository::new(self.db);
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

fn to_dto(model: entity::notices::Model, now: NaiveDateTime) -> NoticeDto {
    let status = NoticeStatus::derive(model.publish_at, model.expires_on, now);

    NoticeDto {
        id: model.id,
        title: model.title,
        description: model.description,
        publish_at: model.publish_at,
        expires_on: model.expires_on,
        posted_by: model.posted_by,
        audience: model.audience,
        attachment_url: model.attachment_url,
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn record_to_request(
    index: &HeaderIndex,
    record: &csv::StringRecord,
) -> Result<NoticeRequest, ValidationError> {
    let publish_raw = index.require(record, "Publish At")?;
    let publish_at = NaiveDateTime::parse_from_str(&publish_raw, CSV_DATETIME_FORMAT).map_err(
        |_| ValidationError::InvalidField {
            field: "Publish At",
            reason: format!("{:?} is not a YYYY-MM-DD HH:MM:SS timestamp", publish_raw),
        },
    )?;

    let expires_on = index
        .get(record, "Expires On")
        .map(|value| {
            NaiveDate::parse_from_str(&value, CSV_DATE_FORMAT).map_err(|_| {
                ValidationError::InvalidField {
                    field: "Expires On",
                    reason: format!("{:?} is not a YYYY-MM-DD date", value),
                }
            })
        })
        .transpose()?;

    Ok(NoticeRequest {
        title: index.require(record, "Title")?,
        description: index.require(record, "Description")?,
        publish_at,
        expires_on,
        posted_by: index.get(record, "Posted By"),
        audience: index.get(record, "Audience"),
        attachment_url: index.get(record, "Attachment"),
    })
}
