use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FeeDto {
    pub id: i32,
    pub course: String,
    pub admission_fee: i32,
    pub semwise_fee: i32,
    pub hostel_fee: Option<i32>,
    pub bus_fee: Option<i32>,
    pub scholarship: Option<String>,
    pub payment_link: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::fees::Model> for FeeDto {
    fn from(model: entity::fees::Model) -> Self {
        Self {
            id: model.id,
            course: model.course,
            admission_fee: model.admission_fee,
            semwise_fee: model.semwise_fee,
            hostel_fee: model.hostel_fee,
            bus_fee: model.bus_fee,
            scholarship: model.scholarship,
            payment_link: model.payment_link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FeeRequest {
    pub course: String,
    pub admission_fee: i32,
    pub semwise_fee: i32,
    #[serde(default)]
    pub hostel_fee: Option<i32>,
    #[serde(default)]
    pub bus_fee: Option<i32>,
    #[serde(default)]
    pub scholarship: Option<String>,
    #[serde(default)]
    pub payment_link: Option<String>,
}
