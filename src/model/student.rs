use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub roll_no: String,
    pub name: String,
    pub course: String,
    pub semester: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub admission_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::students::Model> for StudentDto {
    fn from(model: entity::students::Model) -> Self {
        Self {
            roll_no: model.roll_no,
            name: model.name,
            course: model.course,
            semester: model.semester,
            email: model.email,
            phone: model.phone,
            date_of_birth: model.date_of_birth,
            admission_date: model.admission_date,
            address: model.address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentRequest {
    pub roll_no: String,
    pub name: String,
    pub course: String,
    pub semester: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
}
