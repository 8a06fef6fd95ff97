use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::college::CollegeRepository,
    error::{validation::ValidationError, Error},
    model::college::{CollegeDto, CollegeRequest},
    service::require_text,
};

pub struct CollegeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollegeService<'a> {
    /// Creates a new instance of CollegeService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn validate(request: &CollegeRequest) -> Result<(), ValidationError> {
        require_text("name", &request.name)?;
        require_text("affiliation", &request.affiliation)?;
        require_text("address", &request.address)?;
        require_text("phone", &request.phone)?;
        require_text("email", &request.email)?;

        let current_year = Utc::now().year();
        if request.established_year < 1800 || request.established_year > current_year {
            return Err(ValidationError::InvalidField {
                field: "established_year",
                reason: format!("must be between 1800 and {}", current_year),
            });
        }

        Ok(())
    }

    /// Returns the college profile, or NotFound when none has been saved yet.
    pub async fn get(&self) -> Result<CollegeDto, Error> {
        let college = CollegeRepository::new(self.db)
            .get()
            .await?
            .ok_or(Error::NotFound {
                entity: "college",
                id: "profile".to_string(),
            })?;

        Ok(college.into())
    }

    pub async fn upsert(&self, request: &CollegeRequest) -> Result<CollegeDto, Error> {
        Self::validate(request)?;

        let college = CollegeRepository::new(self.db).upsert(request).await?;

        Ok(college.into())
    }
}
