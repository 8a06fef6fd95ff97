use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "syllabus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course: String,
    pub semester: String,
    /// Ordered list of subjects, serialized as JSON.
    pub subjects: Json,
    pub reference_books: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
