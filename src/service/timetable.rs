use sea_orm::DatabaseConnection;

use crate::{
    data::timetable::TimetableRepository,
    error::{validation::ValidationError, Error},
    model::timetable::{TimetableDto, TimetableRequest, TimetableSlot},
    service::require_text,
};

const CSV_HEADERS: [&str; 7] = [
    "Course",
    "Semester",
    "Day",
    "Time",
    "Subject",
    "Faculty",
    "Room",
];

pub struct TimetableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimetableService<'a> {
    /// Creates a new instance of TimetableService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn validate(request: &TimetableRequest) -> Result<(), ValidationError> {
        require_text("course", &request.course)?;
        require_text("semester", &request.semester)?;

        for slot in &request.slots {
            require_text("slots.day", &slot.day)?;
            require_text("slots.time", &slot.time)?;
            require_text("slots.subject", &slot.subject)?;
        }

        Ok(())
    }

    pub async fn create(&self, request: &TimetableRequest) -> Result<TimetableDto, Error> {
        Self::validate(request)?;

        let slots = serde_json::to_value(&request.slots)?;
        let timetable = TimetableRepository::new(self.db)
            .create(&request.course, &request.semester, slots)
            .await?;

        to_dto(timetable)
    }

    pub async fn get_all(&self) -> Result<Vec<TimetableDto>, Error> {
        let timetables = TimetableRepository::new(self.db).get_all().await?;

        timetables.into_iter().map(to_dto).collect()
    }

    pub async fn get(&self, id: i32) -> Result<TimetableDto, Error> {
        let timetable = TimetableRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "timetable",
                id: id.to_string(),
            })?;

        to_dto(timetable)
    }

    pub async fn update(&self, id: i32, request: &TimetableRequest) -> Result<TimetableDto, Error> {
        Self::validate(request)?;

        let slots = serde_json::to_value(&request.slots)?;
        let timetable = TimetableRepository::new(self.db)
            .update(id, &request.course, &request.semester, slots)
            .await?
            .ok_or(Error::NotFound {
                entity: "timetable",
                id: id.to_string(),
            })?;

        to_dto(timetable)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = TimetableRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "timetable",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// Flattens every timetable to one CSV row per class slot.
    ///
    /// Export only; a flat row cannot reconstruct the per-timetable slot
    /// grouping, so there is no import counterpart.
    pub async fn export_csv(&self) -> Result<String, Error> {
        let timetables = self.get_all().await?;

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADERS)?;

        for timetable in timetables {
            for slot in &timetable.slots {
                writer.write_record([
                    timetable.course.as_str(),
                    timetable.semester.as_str(),
                    slot.day.as_str(),
                    slot.time.as_str(),
                    slot.subject.as_str(),
                    slot.faculty.as_deref().unwrap_or_default(),
                    slot.room.as_deref().unwrap_or_default(),
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

fn to_dto(model: entity::timetables::Model) -> Result<TimetableDto, Error> {
    let slots: Vec<TimetableSlot> = serde_json::from_value(model.slots)?;

    Ok(TimetableDto {
        id: model.id,
        course: model.course,
        semester: model.semester,
        slots,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

#[cfg(test)]
mod tests {

    mod save {
        use registrar_test_utils::prelude::*;

        use crate::{factory, service::timetable::TimetableService};

        /// Expect the ordered slot list to survive the JSON column round trip
        #[tokio::test]
        async fn preserves_slot_order() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Timetables)?;
            let service = TimetableService::new(&test.state.db);

            let request = factory::mock_timetable_request("BCA", "1");

            let created = service.create(&request).await.unwrap();
            let fetched = service.get(created.id).await.unwrap();

            assert_eq!(fetched.slots, request.slots);

            Ok(())
        }

        /// Expect a slot with a blank subject to reject the whole request
        #[tokio::test]
        async fn rejects_blank_slot_subject() -> Result<(), TestError> {
            let mut request = factory::mock_timetable_request("BCA", "1");
            request.slots[0].subject = "".to_string();

            let result = TimetableService::validate(&request);

            assert!(result.is_err());

            Ok(())
        }

        /// Expect update to replace the slots and 404-map a missing id
        #[tokio::test]
        async fn updates_and_maps_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Timetables)?;
            let service = TimetableService::new(&test.state.db);

            let created = service
                .create(&factory::mock_timetable_request("BCA", "1"))
                .await
                .unwrap();

            let mut request = factory::mock_timetable_request("BCA", "1");
            request.slots.truncate(1);

            let updated = service.update(created.id, &request).await.unwrap();
            assert_eq!(updated.slots.len(), 1);

            let result = service.update(created.id + 100, &request).await;
            assert!(matches!(result, Err(crate::error::Error::NotFound { .. })));

            Ok(())
        }
    }

    mod export {
        use registrar_test_utils::prelude::*;

        use crate::{factory, service::timetable::TimetableService};

        /// Expect one CSV row per slot plus the header row
        #[tokio::test]
        async fn flattens_one_row_per_slot() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Timetables)?;
            let service = TimetableService::new(&test.state.db);

            let request = factory::mock_timetable_request("BCA", "1");
            service.create(&request).await.unwrap();

            let csv = service.export_csv().await.unwrap();
            let lines: Vec<&str> = csv.lines().collect();

            assert_eq!(lines.len(), 1 + request.slots.len());
            assert!(lines[0].starts_with("Course,Semester,Day,Time,Subject"));
            assert!(lines[1].contains("Monday"));

            Ok(())
        }
    }
}
