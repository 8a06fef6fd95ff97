use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One subject within a semester syllabus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SyllabusSubject {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub marks: Option<i32>,
    #[serde(default)]
    pub credits: Option<i32>,
    /// Rich-text HTML unit breakdown
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SyllabusDto {
    pub id: i32,
    pub course: String,
    pub semester: String,
    pub subjects: Vec<SyllabusSubject>,
    pub reference_books: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SyllabusRequest {
    pub course: String,
    pub semester: String,
    pub subjects: Vec<SyllabusSubject>,
    #[serde(default)]
    pub reference_books: Option<String>,
}
