use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::model::college::CollegeRequest;

/// Repository for the singleton college profile.
///
/// The collection holds at most one meaningful row; `get` returns the oldest
/// row and `upsert` updates it in place or creates it when absent.
pub struct CollegeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollegeRepository<'a, C> {
    /// Creates a new instance of [`CollegeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<Option<entity::college::Model>, DbErr> {
        entity::prelude::College::find()
            .order_by_asc(entity::college::Column::Id)
            .one(self.db)
            .await
    }

    /// Creates the profile or replaces the existing one, stamping timestamps
    pub async fn upsert(&self, request: &CollegeRequest) -> Result<entity::college::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.get().await? {
            None => {
                let college = entity::college::ActiveModel {
                    name: ActiveValue::Set(request.name.clone()),
                    established_year: ActiveValue::Set(request.established_year),
                    affiliation: ActiveValue::Set(request.affiliation.clone()),
                    accreditation: ActiveValue::Set(request.accreditation.clone()),
                    address: ActiveValue::Set(request.address.clone()),
                    phone: ActiveValue::Set(request.phone.clone()),
                    email: ActiveValue::Set(request.email.clone()),
                    website: ActiveValue::Set(request.website.clone()),
                    principal: ActiveValue::Set(request.principal.clone()),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                college.insert(self.db).await
            }
            Some(college) => {
                let mut college_am = college.into_active_model();
                college_am.name = ActiveValue::Set(request.name.clone());
                college_am.established_year = ActiveValue::Set(request.established_year);
                college_am.affiliation = ActiveValue::Set(request.affiliation.clone());
                college_am.accreditation = ActiveValue::Set(request.accreditation.clone());
                college_am.address = ActiveValue::Set(request.address.clone());
                college_am.phone = ActiveValue::Set(request.phone.clone());
                college_am.email = ActiveValue::Set(request.email.clone());
                college_am.website = ActiveValue::Set(request.website.clone());
                college_am.principal = ActiveValue::Set(request.principal.clone());
                college_am.updated_at = ActiveValue::Set(now);

                college_am.update(self.db).await
            }
        }
    }
}
