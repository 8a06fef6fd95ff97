use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
