use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// The roll number doubles as the document id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub roll_no: String,
    pub name: String,
    pub course: String,
    pub semester: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub admission_date: Option<Date>,
    pub address: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
