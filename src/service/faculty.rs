use sea_orm::DatabaseConnection;

use crate::{
    data::faculty::FacultyRepository,
    error::{validation::ValidationError, Error},
    model::faculty::{FacultyDto, FacultyMember, FacultyRequest},
    service::require_text,
};

const CSV_HEADERS: [&str; 7] = [
    "Department",
    "HOD",
    "Member Name",
    "Subject",
    "Email",
    "Phone",
    "Qualification",
];

pub struct FacultyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacultyService<'a> {
    /// Creates a new instance of FacultyService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn validate(request: &FacultyRequest) -> Result<(), ValidationError> {
        require_text("department", &request.department)?;
        require_text("hod_name", &request.hod_name)?;

        for member in &request.members {
            require_text("members.name", &member.name)?;
            require_text("members.subject", &member.subject)?;
        }

        Ok(())
    }

    pub async fn create(&self, request: &FacultyRequest) -> Result<FacultyDto, Error> {
        Self::validate(request)?;

        let members = serde_json::to_value(&request.members)?;
        let faculty = FacultyRepository::new(self.db)
            .create(&request.department, &request.hod_name, members)
            .await?;

        to_dto(faculty)
    }

    pub async fn get_all(&self) -> Result<Vec<FacultyDto>, Error> {
        let faculty = FacultyRepository::new(self.db).get_all().await?;

        faculty.into_iter().map(to_dto).collect()
    }

    pub async fn get(&self, id: i32) -> Result<FacultyDto, Error> {
        let faculty = FacultyRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "faculty",
                id: id.to_string(),
            })?;

        to_dto(faculty)
    }

    pub async fn update(&self, id: i32, request: &FacultyRequest) -> Result<FacultyDto, Error> {
        Self::validate(request)?;

        let members = serde_json::to_value(&request.members)?;
        let faculty = FacultyRepository::new(self.db)
            .update(id, &request.department, &request.hod_name, members)
            .await?
            .ok_or(Error::NotFound {
                entity: "faculty",
                id: id.to_string(),
            })?;

        to_dto(faculty)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = FacultyRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "faculty",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// Flattens every department's member list to one CSV row per member.
    ///
    /// Export only; the nested member list has no row-per-record import shape.
    pub async fn export_csv(&self) -> Result<String, Error> {
        let groups = self.get_all().await?;

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(CSV_HEADERS)?;

        for group in groups {
            for member in &group.members {
                writer.write_record([
                    group.department.as_str(),
                    group.hod_name.as_str(),
                    member.name.as_str(),
                    member.subject.as_str(),
                    member.email.as_deref().unwrap_or(""),
                    member.phone.as_deref().unwrap_or(""),
                    member.qualification.as_deref().unwrap_or(""),
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

fn to_dto(model: entity::faculty::Model) -> Result<FacultyDto, Error> {
    let members: Vec<FacultyMember> = serde_json::from_value(model.members)?;

    Ok(FacultyDto {
        id: model.id,
        department: model.department,
        hod_name: model.hod_name,
        members,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

#[cfg(test)]
mod tests {

    mod save {
        use registrar_test_utils::prelude::*;

        use crate::{factory, service::faculty::FacultyService};

        /// Expect the member list to survive the JSON column round trip in
        /// its original order
        #[tokio::test]
        async fn preserves_member_order() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Faculty)?;
            let service = FacultyService::new(&test.state.db);

            let request = factory::mock_faculty_request("Computer Applications");
            let created = service.create(&request).await.unwrap();

            let fetched = service.get(created.id).await.unwrap();
            assert_eq!(fetched.members, request.members);

            Ok(())
        }

        /// Expect a member with a blank name to reject the whole request
        #[tokio::test]
        async fn rejects_blank_member_name() -> Result<(), TestError> {
            let mut request = factory::mock_faculty_request("Computer Applications");
            request.members[0].name = " ".to_string();

            let result = FacultyService::validate(&request);

            assert!(result.is_err());

            Ok(())
        }
    }

    mod csv {
        use registrar_test_utils::prelude::*;

        use crate::{factory, service::faculty::FacultyService};

        /// Expect one exported row per member, carrying the department on
        /// every row
        #[tokio::test]
        async fn exports_one_row_per_member() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Faculty)?;
            let service = FacultyService::new(&test.state.db);

            let request = factory::mock_faculty_request("Computer Applications");
            let member_count = request.members.len();
            service.create(&request).await.unwrap();

            let exported = service.export_csv().await.unwrap();
            let data_lines = exported.lines().skip(1).count();

            assert_eq!(data_lines, member_count);
            for line in exported.lines().skip(1) {
                assert!(line.starts_with("Computer Applications,"));
            }

            Ok(())
        }
    }
}
