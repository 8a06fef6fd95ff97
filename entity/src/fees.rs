use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Free-text copy of a course name, not a foreign key.
    pub course: String,
    pub admission_fee: i32,
    pub semwise_fee: i32,
    pub hostel_fee: Option<i32>,
    pub bus_fee: Option<i32>,
    pub scholarship: Option<String>,
    pub payment_link: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
