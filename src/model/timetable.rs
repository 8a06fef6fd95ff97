use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One class slot within a weekly timetable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimetableSlot {
    /// Weekday name, e.g. "Monday"
    pub day: String,
    /// Display time range, e.g. "09:00-10:00"
    pub time: String,
    pub subject: String,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TimetableDto {
    pub id: i32,
    pub course: String,
    pub semester: String,
    pub slots: Vec<TimetableSlot>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TimetableRequest {
    pub course: String,
    pub semester: String,
    pub slots: Vec<TimetableSlot>,
}
