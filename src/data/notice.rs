use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::notice::NoticeRequest;

pub struct NoticeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoticeRepository<'a, C> {
    /// Creates a new instance of [`NoticeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new notice, stamping both timestamps
    ///
    /// Only publish/expiry fields are persisted; the Scheduled/Active/Expired
    /// status is derived at read time and never stored.
    pub async fn create(&self, request: &NoticeRequest) -> Result<entity::notices::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let notice = entity::notices::ActiveModel {
            title: ActiveValue::Set(request.title.clone()),
            description: ActiveValue::Set(request.description.clone()),
            publish_at: ActiveValue::Set(request.publish_at),
            expires_on: ActiveValue::Set(request.expires_on),
            posted_by: ActiveValue::Set(request.posted_by.clone()),
            audience: ActiveValue::Set(request.audience.clone()),
            attachment_url: ActiveValue::Set(request.attachment_url.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        notice.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::notices::Model>, DbErr> {
        entity::prelude::Notices::find().all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::notices::Model>, DbErr> {
        entity::prelude::Notices::find_by_id(id).one(self.db).await
    }

    /// Replaces the notice's fields and stamps a fresh `updated_at`
    pub async fn update(
        &self,
        id: i32,
        request: &NoticeRequest,
    ) -> Result<Option<entity::notices::Model>, DbErr> {
        let notice = match entity::prelude::Notices::find_by_id(id).one(self.db).await? {
            Some(notice) => notice,
            None => return Ok(None),
        };

        let mut notice_am = notice.into_active_model();
        notice_am.title = ActiveValue::Set(request.title.clone());
        notice_am.description = ActiveValue::Set(request.description.clone());
        notice_am.publish_at = ActiveValue::Set(request.publish_at);
        notice_am.expires_on = ActiveValue::Set(request.expires_on);
        notice_am.posted_by = ActiveValue::Set(request.posted_by.clone());
        notice_am.audience = ActiveValue::Set(request.audience.clone());
        notice_am.attachment_url = ActiveValue::Set(request.attachment_url.clone());
        notice_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let notice = notice_am.update(self.db).await?;

        Ok(Some(notice))
    }

    /// Deletes a notice
    ///
    /// Returns OK regardless of the notice existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Notices::delete_by_id(id).exec(self.db).await
    }
}
