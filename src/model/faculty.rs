use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One member of a department's faculty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FacultyMember {
    pub name: String,
    pub subject: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FacultyDto {
    pub id: i32,
    pub department: String,
    pub hod_name: String,
    pub members: Vec<FacultyMember>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FacultyRequest {
    pub department: String,
    pub hod_name: String,
    pub members: Vec<FacultyMember>,
}
