use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    pub department: String,
    pub affiliation: String,
    pub duration: String,
    pub total_seats: i32,
    pub fee_structure: String,
    pub other_fee: Option<String>,
    pub scholarship: Option<String>,
    pub eligibility: Option<String>,
    pub hod_name: Option<String>,
    pub counsellor: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::courses::Model> for CourseDto {
    fn from(model: entity::courses::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            department: model.department,
            affiliation: model.affiliation,
            duration: model.duration,
            total_seats: model.total_seats,
            fee_structure: model.fee_structure,
            other_fee: model.other_fee,
            scholarship: model.scholarship,
            eligibility: model.eligibility,
            hod_name: model.hod_name,
            counsellor: model.counsellor,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Typed create/update payload for a course.
///
/// Timestamps are never part of the request; the repository stamps them.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseRequest {
    pub name: String,
    pub department: String,
    pub affiliation: String,
    pub duration: String,
    pub total_seats: i32,
    pub fee_structure: String,
    #[serde(default)]
    pub other_fee: Option<String>,
    #[serde(default)]
    pub scholarship: Option<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub hod_name: Option<String>,
    #[serde(default)]
    pub counsellor: Option<String>,
}
