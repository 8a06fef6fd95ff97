use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CollegeDto {
    pub id: i32,
    pub name: String,
    pub established_year: i32,
    pub affiliation: String,
    pub accreditation: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub principal: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::college::Model> for CollegeDto {
    fn from(model: entity::college::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            established_year: model.established_year,
            affiliation: model.affiliation,
            accreditation: model.accreditation,
            address: model.address,
            phone: model.phone,
            email: model.email,
            website: model.website,
            principal: model.principal,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CollegeRequest {
    pub name: String,
    pub established_year: i32,
    pub affiliation: String,
    #[serde(default)]
    pub accreditation: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub principal: Option<String>,
}
