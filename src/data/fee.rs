use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::fee::FeeRequest;

pub struct FeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeeRepository<'a, C> {
    /// Creates a new instance of [`FeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new fee structure, stamping both timestamps
    pub async fn create(&self, request: &FeeRequest) -> Result<entity::fees::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let fee = entity::fees::ActiveModel {
            course: ActiveValue::Set(request.course.clone()),
            admission_fee: ActiveValue::Set(request.admission_fee),
            semwise_fee: ActiveValue::Set(request.semwise_fee),
            hostel_fee: ActiveValue::Set(request.hostel_fee),
            bus_fee: ActiveValue::Set(request.bus_fee),
            scholarship: ActiveValue::Set(request.scholarship.clone()),
            payment_link: ActiveValue::Set(request.payment_link.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        fee.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::fees::Model>, DbErr> {
        entity::prelude::Fees::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::fees::Model>, DbErr> {
        entity::prelude::Fees::find_by_id(id).one(self.db).await
    }

    /// Replaces the fee structure's fields and stamps a fresh `updated_at`
    pub async fn update(
        &self,
        id: i32,
        request: &FeeRequest,
    ) -> Result<Option<entity::fees::Model>, DbErr> {
        let fee = match entity::prelude::Fees::find_by_id(id).one(self.db).await? {
            Some(fee) => fee,
            None => return Ok(None),
        };

        let mut fee_am = fee.into_active_model();
        fee_am.course = ActiveValue::Set(request.course.clone());
        fee_am.admission_fee = ActiveValue::Set(request.admission_fee);
        fee_am.semwise_fee = ActiveValue::Set(request.semwise_fee);
        fee_am.hostel_fee = ActiveValue::Set(request.hostel_fee);
        fee_am.bus_fee = ActiveValue::Set(request.bus_fee);
        fee_am.scholarship = ActiveValue::Set(request.scholarship.clone());
        fee_am.payment_link = ActiveValue::Set(request.payment_link.clone());
        fee_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let fee = fee_am.update(self.db).await?;

        Ok(Some(fee))
    }

    /// Deletes a fee structure
    ///
    /// Returns OK regardless of the fee existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Fees::delete_by_id(id).exec(self.db).await
    }
}
