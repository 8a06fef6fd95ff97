//! Factory helpers for seeding database records in tests.
//!
//! Helpers insert entity models directly so they stay independent of the
//! application crate's service layer.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::error::TestError;

/// Insert an admin with a real argon2 hash so sign-in flows can be exercised.
pub async fn insert_mock_admin<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<entity::admins::Model, TestError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("failed to hash test password")
        .to_string();

    let now = Utc::now().naive_utc();

    let admin = entity::admins::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        display_name: ActiveValue::Set("Test Admin".to_string()),
        role: ActiveValue::Set("admin".to_string()),
        password_hash: ActiveValue::Set(password_hash),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(admin.insert(db).await?)
}
