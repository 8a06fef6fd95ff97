use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    /// Creates a new instance of [`AdminRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new admin role record
    ///
    /// `password_hash` must already be an argon2 PHC string; plaintext never
    /// reaches this layer.
    pub async fn create(
        &self,
        email: &str,
        display_name: &str,
        password_hash: &str,
    ) -> Result<entity::admins::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let admin = entity::admins::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            role: ActiveValue::Set("admin".to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        admin.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::admins::Model>, DbErr> {
        entity::prelude::Admins::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::admins::Model>, DbErr> {
        entity::prelude::Admins::find()
            .filter(entity::admins::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Admins::find().count(self.db).await
    }
}
